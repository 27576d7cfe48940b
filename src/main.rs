//! TLS client-certificate shim.
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                  TLS SHIM                     │
//!   TLS           │                                               │
//!   terminator    │  ┌─────────┐   ┌────────┐   /version          │
//!   ──────────────┼─▶│   net   │──▶│  http  │──────────▶ version   │
//!   (plain HTTP + │  │listener │   │ server │                     │
//!   X-Arr-        │  └─────────┘   └───┬────┘   other paths       │
//!   Clientcert)   │                    └───────▶ security gate    │
//!                 │                               │ 403 / forward │
//!                 │                               ▼               │
//!                 │                          proxy forwarder      │
//!                 └──────────────────────────────────────────────┘
//! ```

use tls_shim::config::{self, ObservabilityConfig};
use tls_shim::lifecycle::{forward_signals, Shutdown};
use tls_shim::{net, observability, ShimServer, VersionReport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init(&ObservabilityConfig::default())?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "tls-shim starting");

    let config = config::load_from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        port = config.listener.port,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let version = VersionReport::load(&config.version).inspect_err(|e| {
        tracing::error!(error = %e, "Could not render version payload");
    })?;

    let listener = net::bind(&config.listener).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to bind listener");
    })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let _signals = forward_signals(shutdown);

    let server = ShimServer::new(config, version);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
