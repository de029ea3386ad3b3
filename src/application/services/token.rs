//! Auth token resolution
//!
//! Picks where the token comes from and reads it. Precedence:
//! explicit value, explicit file, configured file, platform default file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{AuthToken, Platform};
use crate::infrastructure::traits::FileSystem;

/// Where the auth token is taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Given on the command line.
    Value(AuthToken),
    /// Read from a file on every run.
    File(PathBuf),
}

/// Service for resolving the auth token.
pub struct TokenService {
    fs: Arc<dyn FileSystem>,
}

impl TokenService {
    /// Create a new token service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Choose the token source by precedence.
    ///
    /// An empty explicit value counts as not given; any other value is used
    /// as is. Only file contents are trimmed.
    pub fn select_source(
        explicit: Option<&str>,
        explicit_path: Option<&Path>,
        configured_path: Option<&Path>,
        platform: Platform,
    ) -> TokenSource {
        if let Some(token) = explicit.and_then(AuthToken::verbatim) {
            return TokenSource::Value(token);
        }
        let path = explicit_path
            .or(configured_path)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| platform.default_authtoken_path());
        TokenSource::File(path)
    }

    /// Produce the token for `source`, reading the file if needed.
    #[instrument(skip(self))]
    pub fn resolve(&self, source: &TokenSource) -> ApplicationResult<AuthToken> {
        match source {
            TokenSource::Value(token) => {
                debug!("resolve: using explicit token");
                Ok(token.clone())
            }
            TokenSource::File(path) => {
                debug!("resolve: reading {}", path.display());
                let content = self.fs.read_to_string(path).with_path_context(path)?;
                AuthToken::parse(&content).ok_or_else(|| ApplicationError::EmptyToken {
                    origin: path.display().to_string(),
                })
            }
        }
    }
}
