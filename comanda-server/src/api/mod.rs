//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单 (只读)
//! - [`orders`] - 订单 (comandas) 和厨房事件流
//! - [`extract`] - 统一错误格式的 JSON 提取器
//! - [`middleware`] - 请求日志和请求 ID

pub mod extract;
pub mod health;
pub mod menu;
pub mod middleware;
pub mod orders;

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::AppError;

// Re-export common types for handlers
pub use crate::utils::AppResult;
pub use extract::JsonBody;

/// Build the Axum router (without state or middleware)
///
/// Routes are relative; [`build_app`] mounts them under the configured prefix.
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(orders::router())
}

/// Build the complete application: routes, prefix, state and middleware
pub fn build_app(state: ServerState) -> Router {
    let prefix = state.config.api_prefix.clone();
    let routes = if prefix.is_empty() {
        build_router()
    } else {
        Router::new().nest(&prefix, build_router())
    };

    routes
        .fallback(route_not_found)
        .with_state(state)
        .layer(
            // Listed outermost first
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::logging_middleware))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route")
}

/// Convert a handler panic into the 500 error envelope
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::internal(format!("Handler panicked: {detail}")).into_response()
}
