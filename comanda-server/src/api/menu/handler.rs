//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::response::{MenuItemResponse, MenuListResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /menu - all items in seed order
pub async fn list(State(state): State<ServerState>) -> Json<MenuListResponse> {
    Json(MenuListResponse::new(state.menu.list().to_vec()))
}

/// GET /menu/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItemResponse>> {
    let item = id
        .parse::<u32>()
        .ok()
        .and_then(|id| state.menu.get(id))
        .ok_or_else(|| AppError::not_found(format!("Menu item {id}")))?;
    Ok(Json(MenuItemResponse::new(item.clone())))
}
