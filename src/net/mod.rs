//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (port)
//!     → listener.rs (bind 0.0.0.0:<port>)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - TLS is terminated upstream; the shim only speaks plaintext HTTP
//! - No connection limit; the HTTP layer bounds each request by timeout

pub mod listener;

pub use listener::{bind, ListenerError};
