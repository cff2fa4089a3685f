//! Resolver chain: table lookup with fallback delegation.
//!
//! # Responsibilities
//! - Try a route table against the request path
//! - On hit, emit the redirect; on miss, hand the request to the next handler
//! - Compose N tables and one terminal handler into a single chain
//!
//! # Design Decisions
//! - One single-method capability (`RequestHandler`); the chain is nested
//!   ownership of that trait, built eagerly at startup
//! - Resolution is synchronous; the only side effect is the final response
//! - Exactly one response per request, redirect or whatever the terminal
//!   handler produces

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

use crate::http::response;
use crate::routing::table::RouteTable;

/// A component that turns a request into a response, either by matching the
/// request itself or by deferring to the next handler it owns.
pub trait RequestHandler: Send + Sync {
    fn handle(&self, request: Request<Body>) -> Response;
}

/// Any plain function of the right shape is a terminal handler.
impl<F> RequestHandler for F
where
    F: Fn(Request<Body>) -> Response + Send + Sync,
{
    fn handle(&self, request: Request<Body>) -> Response {
        self(request)
    }
}

/// Resolves requests against one route table, delegating misses.
pub struct TableResolver {
    table: RouteTable,
    fallback: Box<dyn RequestHandler>,
}

impl TableResolver {
    pub fn new(table: RouteTable, fallback: Box<dyn RequestHandler>) -> Self {
        Self { table, fallback }
    }
}

impl RequestHandler for TableResolver {
    fn handle(&self, request: Request<Body>) -> Response {
        match self.table.lookup(request.uri().path()) {
            Some(destination) => response::found(destination),
            None => self.fallback.handle(request),
        }
    }
}

/// Compose route tables and a terminal handler into a single chain.
///
/// Each table wraps the handler produced by the rest of the list, so the
/// first table is consulted first and `fallback` only runs when every table
/// misses. Construction is eager; nothing is built per request.
pub fn build_chain<I>(tables: I, fallback: Box<dyn RequestHandler>) -> Box<dyn RequestHandler>
where
    I: IntoIterator<Item = RouteTable>,
    I::IntoIter: DoubleEndedIterator,
{
    tables
        .into_iter()
        .rev()
        .fold(fallback, |next, table| Box::new(TableResolver::new(table, next)))
}
