//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all dispatch handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Hand every request to the resolver chain
//! - Serve until the shutdown signal fires
//!
//! # Design Decisions
//! - The resolver chain is built by the caller and injected as shared state;
//!   the server never mutates it
//! - Dispatch is the only route: the chain decides redirect vs fallback

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routing::RequestHandler;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<dyn RequestHandler>,
}

/// HTTP server for the redirect service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a resolver chain.
    pub fn new(config: &ServerConfig, chain: Arc<dyn RequestHandler>) -> Self {
        let state = AppState { chain };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Serve on the given listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler. Every request goes through the resolver chain.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = state.chain.handle(request);

    let status = response.status();
    let outcome = if status == StatusCode::FOUND && response.headers().contains_key(header::LOCATION)
    {
        "redirect"
    } else {
        "fallback"
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = %status,
        outcome,
        "Request resolved"
    );
    metrics::record_request(&method, status.as_u16(), outcome, start);

    response
}
