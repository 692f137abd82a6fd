//! Order API Module
//!
//! Thin adapter over [`OrdersManager`](crate::orders::OrdersManager): every
//! mutation goes through the manager, which validates, logs and broadcasts.

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list).post(handler::create))
        // Kitchen feed (static segment wins over `{id}`)
        .route("/orders/events", get(handler::events))
        .route(
            "/orders/{id}",
            patch(handler::update_status).delete(handler::delete),
        )
}
