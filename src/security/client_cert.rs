//! Client-certificate header gate.

use std::borrow::Cow;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Header injected by the TLS terminator carrying the client certificate.
pub const CLIENT_CERT_HEADER: HeaderName = HeaderName::from_static("x-arr-clientcert");

/// Client certificate data as forwarded by the TLS terminator.
///
/// The header value is kept byte-for-byte; it need not be ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCertificate(HeaderValue);

impl ClientCertificate {
    /// Raw header bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Header value decoded as UTF-8, invalid sequences replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.0.as_bytes())
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

/// Outcome of inspecting a request's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// The request carries a certificate and may be forwarded.
    Authorized(ClientCertificate),
    /// Terminal: the request is rejected with the given reason.
    Unauthorized(&'static str),
}

/// Decide whether a request may proceed to the forwarding stage.
pub fn authorize(headers: &HeaderMap) -> Authorization {
    let Some(value) = headers.get(&CLIENT_CERT_HEADER) else {
        return Authorization::Unauthorized("Request did not contain a certificate");
    };

    if value.is_empty() {
        return Authorization::Unauthorized("Request contained an empty certificate");
    }

    Authorization::Authorized(ClientCertificate(value.clone()))
}
