//! Menu API Module
//!
//! Read-only: the catalog is seeded at startup.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Menu router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/menu", get(handler::list))
        .route("/menu/{id}", get(handler::get_by_id))
}
