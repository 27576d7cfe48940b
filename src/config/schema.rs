//! Configuration schema definitions.
//!
//! All types derive Serde traits so a loaded configuration can be logged or
//! dumped as a structured value.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default TCP port when `LISTEN_PORT` is unset or empty.
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Root configuration for the shim.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ShimConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Where the version files live.
    pub version: VersionConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// TCP port, bound on all IPv4 interfaces.
    pub port: u16,
}

impl ListenerConfig {
    /// Socket address the server binds.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_LISTEN_PORT,
        }
    }
}

/// Locations of the two version files, relative to the working directory.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct VersionConfig {
    /// File holding the shim's own version.
    pub shim_version_path: PathBuf,

    /// File holding the fronted application's version.
    pub app_version_path: PathBuf,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            shim_version_path: PathBuf::from("tls-shim-version.txt"),
            app_version_path: PathBuf::from("app-version.txt"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time to produce a response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_filter: "tls_shim=info,tower_http=info".to_string(),
        }
    }
}
