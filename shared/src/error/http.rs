//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::InvalidTransition => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError | Self::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::OrderEmpty
            | Self::UnknownStatus
            | Self::MenuItemNotFound => StatusCode::BAD_REQUEST,
        }
    }
}
