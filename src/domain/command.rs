//! Positional command grammar.
//!
//! Maps `(command, argument count)` to an [`Operation`]. Wrong argument counts
//! yield a usage line instead of an error; unknown names are reported back to
//! the caller so it can print help.

use crate::domain::Operation;

/// Command used when no positional arguments are given.
pub const DEFAULT_COMMAND: &str = "status";

/// Every command name the dispatcher understands, in help order.
pub const COMMANDS: [&str; 6] = [
    "status",
    "network",
    "member",
    "authorize",
    "deauthorize",
    "delete",
];

pub const NETWORK_USAGE: &str = "Usage: network [<network_id>]";
pub const MEMBER_USAGE: &str = "Usage: member <network_id> [<member_id>]";
pub const AUTHORIZE_USAGE: &str = "Usage: authorize <network_id> <member_id>";
pub const DEAUTHORIZE_USAGE: &str = "Usage: deauthorize <network_id> <member_id>";
pub const DELETE_USAGE: &str = "Usage: delete <network_id> <member_id>";

/// Outcome of dispatching a positional argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Issue exactly this request.
    Request(Operation),
    /// Known command, wrong number of arguments.
    Usage(&'static str),
    /// Command name not in [`COMMANDS`].
    Unknown(String),
}

/// Resolve `argv` (command name first, then its arguments).
pub fn dispatch(argv: &[String]) -> Dispatch {
    let (cmd, args) = match argv.split_first() {
        Some((cmd, args)) => (cmd.as_str(), args),
        None => (DEFAULT_COMMAND, &[][..]),
    };

    match cmd {
        // extra arguments are ignored for status
        "status" => Dispatch::Request(Operation::Status),
        "network" => match args {
            [] => Dispatch::Request(Operation::ListNetworks),
            [network_id] => Dispatch::Request(Operation::ShowNetwork {
                network_id: network_id.clone(),
            }),
            _ => Dispatch::Usage(NETWORK_USAGE),
        },
        "member" => match args {
            [network_id] => Dispatch::Request(Operation::ListMembers {
                network_id: network_id.clone(),
            }),
            // two arguments authorize the member, same as `authorize`
            [network_id, member_id] => Dispatch::Request(authorize(network_id, member_id, true)),
            _ => Dispatch::Usage(MEMBER_USAGE),
        },
        "authorize" => match args {
            [network_id, member_id] => Dispatch::Request(authorize(network_id, member_id, true)),
            _ => Dispatch::Usage(AUTHORIZE_USAGE),
        },
        "deauthorize" => match args {
            [network_id, member_id] => Dispatch::Request(authorize(network_id, member_id, false)),
            _ => Dispatch::Usage(DEAUTHORIZE_USAGE),
        },
        "delete" => match args {
            [network_id, member_id] => Dispatch::Request(Operation::DeleteMember {
                network_id: network_id.clone(),
                member_id: member_id.clone(),
            }),
            _ => Dispatch::Usage(DELETE_USAGE),
        },
        other => Dispatch::Unknown(other.to_string()),
    }
}

fn authorize(network_id: &str, member_id: &str, enable: bool) -> Operation {
    Operation::AuthorizeMember {
        network_id: network_id.to_string(),
        member_id: member_id.to_string(),
        enable,
    }
}
