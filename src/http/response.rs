//! Response construction.
//!
//! # Responsibilities
//! - Build the 302 redirect response for a table hit
//! - Build plain-text responses for terminal handlers
//!
//! # Design Decisions
//! - The Location value is emitted as-is, no escaping or validation
//! - A destination that cannot be encoded as a header value yields a 500
//!   instead of panicking in the request path

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// `302 Found` pointing at `location`, verbatim.
pub fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = StatusCode::FOUND.into_response();
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(_) => {
            tracing::warn!(destination = %location, "Destination not encodable as a Location header");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `200 OK` with a plain-text body.
pub fn plain_text(body: &str) -> Response {
    (StatusCode::OK, body.to_string()).into_response()
}
