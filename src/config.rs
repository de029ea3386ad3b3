//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ztctl/ztctl.toml`
//! 3. Environment variables: `ZTCTL_*` prefix
//! 4. Command line flags (applied by the CLI layer via [`Settings::with_overrides`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, Endpoint};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9993;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub authtoken_path: Option<PathBuf>,
}

/// Unified configuration for ztctl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// API host (default: localhost)
    pub host: String,
    /// API port (default: 9993)
    pub port: u16,
    /// Token file to use instead of the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authtoken_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            authtoken_path: None,
        }
    }
}

/// Get the XDG config directory for ztctl.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ztctl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ztctl.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Endpoint the API client talks to.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.authtoken_path {
            let expanded = expand_env_vars(path.to_string_lossy().as_ref());
            self.authtoken_path = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay values that are set; keep the rest.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            host: overlay.host.clone().unwrap_or_else(|| self.host.clone()),
            port: overlay.port.unwrap_or(self.port),
            authtoken_path: overlay
                .authtoken_path
                .clone()
                .or_else(|| self.authtoken_path.clone()),
        }
    }

    /// Apply command line `--host` / `--port` on top of loaded settings.
    pub fn with_overrides(self, host: Option<String>, port: Option<u16>) -> Self {
        self.merge_with(&RawSettings {
            host,
            port,
            authtoken_path: None,
        })
    }

    /// Load settings with layered precedence, using the XDG global config file.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file location.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply ZTCTL_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ZTCTL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("host") {
            settings.host = val;
        }
        if let Ok(val) = config.get_string("port") {
            settings.port = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("ZTCTL_PORT={val}: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("authtoken_path") {
            settings.authtoken_path = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
