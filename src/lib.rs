//! Path-to-URL redirect server.
//!
//! Maps incoming request paths to redirect targets by consulting an ordered
//! chain of route tables (YAML-defined, then statically configured) and
//! finally a terminal fallback handler.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RequestHandler, RouteTable};
