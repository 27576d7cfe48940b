//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use tls_shim::config::{self, ShimConfig};
use tls_shim::lifecycle::Shutdown;
use tls_shim::{net, ShimServer, VersionReport};

/// A shim running on an ephemeral port.
pub struct RunningShim {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<()>,
}

impl RunningShim {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Config that reads version files from `dir` and binds an ephemeral port.
pub fn config_in(dir: &Path) -> ShimConfig {
    let mut config = config::load_with(|key| (key == "LISTEN_PORT").then(|| "0".to_string()))
        .expect("valid config");
    config.version.shim_version_path = dir.join("tls-shim-version.txt");
    config.version.app_version_path = dir.join("app-version.txt");
    config
}

/// Bind, load versions and serve `config` in the background.
pub async fn start_shim(config: ShimConfig) -> RunningShim {
    let listener = net::bind(&config.listener).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();

    let version = VersionReport::load(&config.version).unwrap();
    let server = ShimServer::new(config, version);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningShim { addr, shutdown, handle }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
