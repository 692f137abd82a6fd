//! Shared types for the comanda service
//!
//! Wire models, response envelopes and the unified error system used by the
//! server and by anything that talks to it.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{MenuItem, Order, OrderCreate, OrderEvent, OrderStatus, OrderStatusUpdate};
