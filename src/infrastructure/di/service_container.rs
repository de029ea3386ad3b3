//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ControllerService, TokenService};
use crate::config::Settings;
use crate::domain::{AuthToken, Platform};
use crate::infrastructure::traits::{FileSystem, HttpTransport, RealFileSystem, ReqwestTransport};
use crate::infrastructure::InfraResult;

/// Container holding settings and the I/O boundaries services are built from.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Platform detected at startup
    pub platform: Platform,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// HTTP transport abstraction
    pub http: Arc<dyn HttpTransport>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings, platform: Platform) -> InfraResult<Self> {
        Ok(Self::with_deps(
            settings,
            platform,
            Arc::new(RealFileSystem),
            Arc::new(ReqwestTransport::new()?),
        ))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        platform: Platform,
        fs: Arc<dyn FileSystem>,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            platform,
            fs,
            http,
        }
    }

    pub fn token_service(&self) -> TokenService {
        TokenService::new(Arc::clone(&self.fs))
    }

    /// Controller client bound to the configured endpoint and `token`.
    pub fn controller_service(&self, token: AuthToken) -> ControllerService {
        ControllerService::new(Arc::clone(&self.http), &self.settings.endpoint(), token)
    }
}
