//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Command table shown below the option list and on unknown commands.
pub const COMMAND_HELP: &str = "\
Commands:
  status                                     Show controller status
  network      [<network_id>]                List all networks or show one network
  member        <network_id>  [<member_id>]  List members of a network; with <member_id>, authorize it
  authorize     <network_id>   <member_id>   Authorize a member in a network
  deauthorize   <network_id>   <member_id>   Deauthorize a member in a network
  delete        <network_id>   <member_id>   Delete a member from a network

Without a command, `status` is run.";

/// Command-line client for the ZeroTier controller API
#[derive(Parser, Debug)]
#[command(name = "ztctl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = COMMAND_HELP)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Controller API host [default: localhost]
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Controller API port [default: 9993]
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Authentication token (wins over any token file)
    #[arg(long, value_name = "TOKEN")]
    pub authtoken: Option<String>,

    /// Path to the authentication token file
    #[arg(long = "authtoken_path", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub authtoken_path: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Command followed by its arguments
    #[arg(value_name = "COMMAND")]
    pub argv: Vec<String>,
}
