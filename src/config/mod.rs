//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (LISTEN_PORT)
//!     → loader.rs (read & parse)
//!     → validation.rs (semantic checks)
//!     → ShimConfig (validated, immutable)
//!     → handed to the server at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so an empty environment is a valid setup
//! - Validation separates parsing from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, load_with, ConfigError, LISTEN_PORT_VAR};
pub use schema::{ListenerConfig, ObservabilityConfig, ShimConfig, TimeoutConfig, VersionConfig};
