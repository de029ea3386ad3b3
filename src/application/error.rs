//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{DomainError, Method};

/// Application errors wrap domain errors and add request/credential context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("auth token is empty: {origin}")]
    EmptyToken { origin: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("request failed: {method} {url}: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{method} {url} returned HTTP {status}")]
    HttpStatus {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },

    #[error("invalid JSON in response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
