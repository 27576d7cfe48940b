//! The forwarder seam and its pass-through implementation.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;

use crate::security::ClientCertificate;

/// A request that passed the client-certificate gate.
#[derive(Debug)]
pub struct AuthorizedRequest {
    pub request: Request<Body>,
    pub certificate: ClientCertificate,
}

impl AuthorizedRequest {
    pub fn path(&self) -> &str {
        self.request.uri().path()
    }
}

/// Handles authorized requests. Every call must produce a response.
pub trait Forwarder: Send + Sync + 'static {
    fn forward(&self, request: AuthorizedRequest) -> BoxFuture<'static, Response>;
}

/// Answers `Other response <path>` without contacting any upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoForwarder;

impl Forwarder for EchoForwarder {
    fn forward(&self, request: AuthorizedRequest) -> BoxFuture<'static, Response> {
        let body = format!("Other response {}", request.path());
        Box::pin(async move { (StatusCode::OK, body).into_response() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::{authorize, Authorization};
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_echo_forwarder_writes_path() {
        let request = Request::builder()
            .uri("/foo/bar?q=1")
            .header("x-arr-clientcert", "abc")
            .body(Body::empty())
            .unwrap();
        let Authorization::Authorized(certificate) = authorize(request.headers()) else {
            panic!("header should authorize");
        };

        let response = EchoForwarder
            .forward(AuthorizedRequest { request, certificate })
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Other response /foo/bar");
    }
}
