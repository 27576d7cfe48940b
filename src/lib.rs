//! TLS client-certificate shim.
//!
//! Sits behind a TLS terminator, reports versions on `/version` and lets
//! through only requests carrying the `X-Arr-Clientcert` header.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod proxy;
pub mod security;
pub mod version;

pub use config::ShimConfig;
pub use http::ShimServer;
pub use lifecycle::Shutdown;
pub use version::VersionReport;
