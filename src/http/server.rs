//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the version and passthrough handlers
//! - Wire up middleware (tracing, request ID, timeout)
//! - Run on a listener until shutdown is signalled

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ShimConfig;
use crate::http::request::{self, MakeRequestUuidV4};
use crate::http::response;
use crate::proxy::{AuthorizedRequest, EchoForwarder, Forwarder};
use crate::security::{authorize, Authorization};
use crate::version::VersionReport;

/// Path served by the version reporter.
pub const VERSION_PATH: &str = "/version";

/// Error type for running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("HTTP server failed: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub version: Arc<VersionReport>,
    pub forwarder: Arc<dyn Forwarder>,
}

/// HTTP server for the shim.
pub struct ShimServer {
    router: Router,
}

impl ShimServer {
    /// Create a server that answers authorized requests with [`EchoForwarder`].
    pub fn new(config: ShimConfig, version: VersionReport) -> Self {
        Self::with_forwarder(config, version, Arc::new(EchoForwarder))
    }

    /// Create a server with a custom forwarding stage.
    pub fn with_forwarder(
        config: ShimConfig,
        version: VersionReport,
        forwarder: Arc<dyn Forwarder>,
    ) -> Self {
        let state = AppState {
            version: Arc::new(version),
            forwarder,
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShimConfig, state: AppState) -> Router {
        Router::new()
            .route(VERSION_PATH, any(version_handler))
            .fallback(passthrough_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn version_handler(State(state): State<AppState>) -> Response {
    response::version(&state.version)
}

/// Everything except `/version`: gate on the client certificate, then forward.
async fn passthrough_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match authorize(request.headers()) {
        Authorization::Unauthorized(reason) => {
            tracing::warn!(
                path = %request.uri().path(),
                reason,
                "Responding with unauthorized"
            );
            response::unauthorized()
        }
        Authorization::Authorized(certificate) => {
            tracing::debug!(
                path = %request.uri().path(),
                cert_len = certificate.as_bytes().len(),
                "Forwarding authorized request"
            );
            state
                .forwarder
                .forward(AuthorizedRequest { request, certificate })
                .await
        }
    }
}
