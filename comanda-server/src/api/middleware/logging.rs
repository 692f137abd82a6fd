//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含请求 ID、路由和状态码

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
///
/// 记录请求结束，包含以下信息：
/// - 请求 ID (x-request-id，由 SetRequestIdLayer 写入)
/// - HTTP 方法和路由模板 (例如 `/orders/{id}`)
/// - 响应状态码
/// - 请求延迟 (毫秒)
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    // 根据状态码使用不同级别记录日志
    if status.is_server_error() {
        warn!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "Request completed with server error"
        );
    } else if status.is_client_error() {
        warn!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "Request completed with client error"
        );
    } else {
        info!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "Request completed"
        );
    }

    response
}
