//! Order API Handlers

use std::convert::Infallible;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::Stream;
use shared::response::{MessageResponse, OrderCreatedResponse, OrderListResponse};
use shared::{Order, OrderCreate, OrderStatusUpdate};
use tokio::sync::broadcast::error::RecvError;

use crate::api::JsonBody;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Path ids that do not parse can never match an order
fn parse_id(raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::order_not_found(raw))
}

/// GET /orders
pub async fn list(State(state): State<ServerState>) -> Json<OrderListResponse> {
    Json(OrderListResponse::new(state.orders.list()))
}

/// POST /orders - 201 with the created order
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderCreatedResponse>)> {
    let order = state.orders.create(payload)?;
    Ok((StatusCode::CREATED, Json(OrderCreatedResponse::new(order))))
}

/// PATCH /orders/{id} - responds with the bare order record
///
/// The kitchen panel replaces its local row with this body, so it is not
/// wrapped in an envelope.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    // A missing status is reported even when the id is bogus
    if payload.status.is_none() {
        return Err(AppError::required("status"));
    }
    let id = parse_id(&id)?;
    let order = state.orders.update_status(id, payload)?;
    Ok(Json(order))
}

/// DELETE /orders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.orders.delete(id)?;
    Ok(Json(MessageResponse::new(format!("Order {id} deleted"))))
}

/// GET /orders/events - kitchen feed as Server-Sent Events
///
/// Each lifecycle event is sent with `event: <name>` and the JSON-encoded
/// [`OrderEvent`](shared::OrderEvent) as data.
pub async fn events(
    State(state): State<ServerState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.orders.subscribe();
    tracing::debug!("Kitchen feed subscriber connected");

    let stream = futures::stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => match Event::default().event(event.name()).json_data(&event) {
                    Ok(sse) => return Some((Ok(sse), rx)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to encode order event");
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Kitchen feed subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
