//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use shortlink::config::ServerConfig;
use shortlink::http::HttpServer;
use shortlink::lifecycle::Shutdown;
use shortlink::routing::RequestHandler;

/// Start a server on an ephemeral port around the given chain.
/// Returns the bound address and the shutdown handle keeping it alive.
pub async fn spawn_server(
    config: ServerConfig,
    chain: Arc<dyn RequestHandler>,
) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(&config, chain);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// HTTP client that does not follow redirects, so 302s stay observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
