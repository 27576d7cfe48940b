//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (not /version):
//!     → client_cert.rs (look for X-Arr-Clientcert)
//!     → Unauthorized: 403, request ends here
//!     → Authorized: hand off to the forwarding stage
//! ```
//!
//! # Design Decisions
//! - Fail closed: a missing or unreadable header is a rejection
//! - The header is trusted as injected by the upstream TLS terminator;
//!   certificate content is not parsed here

pub mod client_cert;

pub use client_cert::{authorize, Authorization, ClientCertificate, CLIENT_CERT_HEADER};
