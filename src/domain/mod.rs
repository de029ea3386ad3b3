//! Domain layer: platforms, operations, and the command grammar
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod command;
pub mod entities;
pub mod error;
pub mod operation;
pub mod platform;

pub use command::{dispatch, Dispatch, COMMANDS};
pub use entities::*;
pub use error::DomainError;
pub use operation::{Method, Operation};
pub use platform::Platform;

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Falls back to the input unchanged if expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
