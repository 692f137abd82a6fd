use shared::{AppError, ErrorCode, OrderStatus};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Order not found: {0}")]
    OrderNotFound(u64),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Too many items: {count} (max {max})")]
    TooManyItems { count: usize, max: usize },

    #[error("Unknown menu items: {0:?}")]
    UnknownMenuItems(Vec<u32>),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: u64,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Field-level validation failure, already classified
    #[error(transparent)]
    Invalid(#[from] AppError),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::OrderNotFound(id) => AppError::order_not_found(id),
            ManagerError::EmptyOrder => AppError::with_message(
                ErrorCode::OrderEmpty,
                "Order must contain at least one item",
            )
            .with_detail("field", "items"),
            ManagerError::TooManyItems { count, max } => AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("items has {count} entries, max {max}"),
            )
            .with_detail("field", "items"),
            ManagerError::UnknownMenuItems(ids) => AppError::with_message(
                ErrorCode::MenuItemNotFound,
                format!("Menu items not found: {ids:?}"),
            )
            .with_detail("ids", ids),
            ManagerError::UnknownStatus(status) => AppError::with_message(
                ErrorCode::UnknownStatus,
                format!(
                    "Unknown status {status:?}, expected one of: {}",
                    OrderStatus::ALL.map(|s| s.as_str()).join(", ")
                ),
            )
            .with_detail("status", status),
            ManagerError::InvalidTransition { id, from, to } => AppError::with_message(
                ErrorCode::InvalidTransition,
                format!("Order {id} cannot move from {from} to {to}"),
            )
            .with_detail("from", from.as_str())
            .with_detail("to", to.as_str()),
            ManagerError::Invalid(e) => e,
        }
    }
}
