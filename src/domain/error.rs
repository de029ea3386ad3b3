//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the client's own rules.
/// These are independent of I/O and transport concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported OS type: {0}")]
    UnsupportedPlatform(String),
}
