//! Version reporting subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → source.rs (read each version file, fall back to a default)
//!     → VersionInfo (two strings)
//!     → report.rs (render JSON once)
//!     → Arc<VersionReport> injected into the HTTP router
//! ```
//!
//! # Design Decisions
//! - Files are read exactly once; the rendered body never changes afterwards
//! - A missing file is a normal configuration case, not an error

pub mod report;
pub mod source;

pub use report::{VersionError, VersionInfo, VersionReport};
pub use source::{VersionSource, DEFAULT_APP_VERSION, DEFAULT_SHIM_VERSION};
