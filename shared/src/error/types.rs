//! Error types and the error response envelope

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type of the service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a missing-field error
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an order not found error
    pub fn order_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(ErrorCode::OrderNotFound, format!("Order {id} not found"))
            .with_detail("id", id.to_string())
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Error response envelope
///
/// ```json
/// { "success": false, "code": 4001, "message": "Order 7 not found", "detail": { "id": "7" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Numeric error code
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            success: false,
            code: err.code.code(),
            message: err.message.clone(),
            detail: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // System errors carry internal context; log it and send a generic message
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
            let body = ErrorBody {
                success: false,
                code: self.code.code(),
                message: self.code.message().to_string(),
                detail: None,
            };
            return (status, Json(body)).into_response();
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Invalid status")
            .with_detail("field", "status")
            .with_detail("value", "Pronto");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "status");
        assert_eq!(details.get("value").unwrap(), "Pronto");
    }

    #[test]
    fn test_convenience_constructors() {
        let err = AppError::required("table");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "table is required");
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err = AppError::order_not_found(999999);
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.message, "Order 999999 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::not_found("Menu item 42");
        assert_eq!(err.message, "Menu item 42 not found");
        assert!(err.details.as_ref().unwrap().contains_key("resource"));

        let err = AppError::internal("lock poisoned");
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::OrderNotFound, "Order 3 not found");
        assert_eq!(format!("{}", err), "Order 3 not found");
    }

    #[test]
    fn test_error_body_serialize() {
        let err = AppError::order_not_found(7);
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], 4001);
        assert_eq!(json["message"], "Order 7 not found");
        assert_eq!(json["detail"]["id"], "7");
    }

    #[test]
    fn test_error_body_omits_empty_detail() {
        let err = AppError::validation("bad");
        let json = serde_json::to_string(&ErrorBody::from(&err)).unwrap();
        assert!(!json.contains("detail"));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::required("status").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
