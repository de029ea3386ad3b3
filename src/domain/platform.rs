//! Supported host platforms and their conventional token locations.

use std::fmt;
use std::path::PathBuf;

use crate::domain::DomainError;

pub const WINDOWS_AUTHTOKEN_PATH: &str = r"C:\ProgramData\ZeroTier\One\authtoken.secret";
pub const LINUX_AUTHTOKEN_PATH: &str = "/var/lib/zerotier-one/authtoken.secret";
pub const MACOS_AUTHTOKEN_PATH: &str = "/Library/Application Support/ZeroTier/One/authtoken.secret";

/// Closed set of operating systems the daemon ships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    ///
    /// `darwin` is accepted as an alias for `macos`.
    pub fn from_os(os: &str) -> Result<Self, DomainError> {
        match os.to_ascii_lowercase().as_str() {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "darwin" => Ok(Platform::MacOs),
            other => Err(DomainError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Platform of the running process.
    pub fn current() -> Result<Self, DomainError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Where the daemon writes its auth token on this platform.
    pub fn default_authtoken_path(self) -> PathBuf {
        match self {
            Platform::Windows => PathBuf::from(WINDOWS_AUTHTOKEN_PATH),
            Platform::Linux => PathBuf::from(LINUX_AUTHTOKEN_PATH),
            Platform::MacOs => PathBuf::from(MACOS_AUTHTOKEN_PATH),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        };
        f.write_str(name)
    }
}
