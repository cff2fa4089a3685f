//! Redirect server binary.
//!
//! Startup order: parse CLI → load config → init logging → init metrics →
//! build route tables → compose the resolver chain → bind → serve until a
//! termination signal. Any startup error is fatal; the server never serves
//! with a broken route table.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use clap::Parser;
use tokio::net::TcpListener;

use shortlink::config::{load_config, ServerConfig};
use shortlink::http::{response, HttpServer};
use shortlink::lifecycle::{signals, Shutdown};
use shortlink::observability::{logging, metrics};
use shortlink::routing::{build_chain, yaml, RequestHandler, RouteTable};

#[derive(Parser)]
#[command(name = "shortlink")]
#[command(about = "Maps request paths to redirect targets", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML route file, overriding `route_file` from the config.
    #[arg(short = 'f', long)]
    routes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("shortlink v0.1.0 starting");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // File table first, static table second; the first hit wins.
    let mut tables = Vec::new();

    let route_file = cli
        .routes
        .clone()
        .or_else(|| config.route_file.as_ref().map(PathBuf::from));
    if let Some(path) = &route_file {
        let table = yaml::load_file(path)?;
        tracing::info!(
            file = %path.display(),
            routes = table.len(),
            "Route file loaded"
        );
        tables.push(table);
    }

    let static_table: RouteTable = config
        .routes
        .iter()
        .map(|route| (route.path.clone(), route.url.clone()))
        .collect();
    tracing::info!(routes = static_table.len(), "Static route table built");
    tables.push(static_table);

    let fallback: Box<dyn RequestHandler> =
        Box::new(|_request: Request<Body>| response::plain_text("Hello, world!"));
    let chain: Arc<dyn RequestHandler> = Arc::from(build_chain(tables, fallback));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    let server = HttpServer::new(&config, chain);
    server.run(listener, server_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
