//! Forwarding stage for authorized requests.
//!
//! The gate in [`crate::security`] decides *whether* a request proceeds;
//! a [`Forwarder`] decides *what* happens to it next. The only forwarder
//! shipped is [`EchoForwarder`], which answers locally.

pub mod forward;

pub use forward::{AuthorizedRequest, EchoForwarder, Forwarder};
