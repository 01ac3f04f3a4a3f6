//! HTTP route table.
//!
//! A single route, `GET /`. Unmatched paths fall through to axum's default 404,
//! and other methods on `/` get axum's default 405 with an `Allow` header.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod index;

use axum::{middleware, routing::get, Router};

use crate::config::INDEX_PATH;
use crate::middleware::request_span_layer;

/// Creates the Axum router.
pub fn create_router() -> Router {
    Router::new()
        .route(INDEX_PATH, get(index::index))
        // Request span middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_span_layer))
}
