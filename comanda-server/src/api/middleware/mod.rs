//! HTTP 中间件

mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::MakeRequestUuid;
