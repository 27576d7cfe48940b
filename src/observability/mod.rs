//! Observability subsystem.
//!
//! Structured logging through `tracing`. Each request runs inside a span
//! carrying its method, path and request ID (see [`crate::http::request`]).

pub mod logging;

pub use logging::init;
