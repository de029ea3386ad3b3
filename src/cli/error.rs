//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
///
/// Usage mistakes are not errors: they are printed and exit 0.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::from(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::HttpClient { .. } => exitcode::SOFTWARE,
                InfraError::Application(e) => match e {
                    ApplicationError::Domain(DomainError::UnsupportedPlatform(_)) => {
                        exitcode::OSERR
                    }
                    ApplicationError::FileRead { .. } => exitcode::NOINPUT,
                    ApplicationError::EmptyToken { .. } | ApplicationError::Config { .. } => {
                        exitcode::CONFIG
                    }
                    ApplicationError::Transport { .. } | ApplicationError::HttpStatus { .. } => {
                        exitcode::UNAVAILABLE
                    }
                    ApplicationError::Decode { .. } => exitcode::DATAERR,
                },
            },
        }
    }
}
