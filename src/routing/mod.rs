//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table Construction (at startup):
//!     YAML buffer ──▶ yaml.rs (parse, fold entries) ──▶ RouteTable
//!     static config ──▶ table.rs (insert in order) ──▶ RouteTable
//!
//!     RouteTable[] + terminal handler
//!         ──▶ resolver.rs (build_chain)
//!         ──▶ Box<dyn RequestHandler> (first table tried first)
//!
//! Per Request:
//!     request path
//!         ──▶ resolver.rs (table lookup)
//!         ──▶ hit: 302 Found with Location
//!         ──▶ miss: delegate to next handler in the chain
//! ```
//!
//! # Design Decisions
//! - Tables built once before serving, immutable at runtime
//! - Exact path match only (no prefixes, no regex)
//! - Duplicate paths within one table: last write wins
//! - A lookup miss is the defined fallback path, never an error

pub mod resolver;
pub mod table;
pub mod yaml;

pub use resolver::{build_chain, RequestHandler, TableResolver};
pub use table::{RouteEntry, RouteTable};
pub use yaml::RouteFileError;
