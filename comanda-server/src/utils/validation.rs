//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! order handlers and the lifecycle manager.

use shared::{AppError, ErrorCode};

// ── Limits ──────────────────────────────────────────────────────────

/// Table labels ("Mesa 5", "Balcão", ...)
pub const MAX_TABLE_LEN: usize = 64;

/// Maximum number of item references in one order
pub const MAX_ORDER_ITEMS: usize = 200;

/// Maximum allowed order total
pub const MAX_TOTAL: f64 = 1_000_000.0;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is present, non-blank and within the length limit.
///
/// Returns the trimmed value.
pub fn validate_required_text<'a>(
    value: Option<&'a str>,
    field: &str,
    max_len: usize,
) -> Result<&'a str, AppError> {
    let Some(value) = value else {
        return Err(AppError::required(field));
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(trimmed)
}

/// Validate a monetary amount: present, finite, non-negative and bounded.
pub fn validate_amount(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    let Some(value) = value else {
        return Err(AppError::required(field));
    };
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a finite number"),
        )
        .with_detail("field", field));
    }
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be non-negative, got {value}"),
        )
        .with_detail("field", field));
    }
    if value > MAX_TOTAL {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} exceeds maximum allowed ({MAX_TOTAL}), got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(
            validate_required_text(Some("  Mesa 5 "), "table", MAX_TABLE_LEN).unwrap(),
            "Mesa 5"
        );

        let err = validate_required_text(None, "table", MAX_TABLE_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = validate_required_text(Some("   "), "table", MAX_TABLE_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let long = "x".repeat(MAX_TABLE_LEN + 1);
        assert!(validate_required_text(Some(&long), "table", MAX_TABLE_LEN).is_err());
    }

    #[test]
    fn test_amount() {
        assert_eq!(validate_amount(Some(33.0), "total").unwrap(), 33.0);
        assert_eq!(validate_amount(Some(0.0), "total").unwrap(), 0.0);

        assert_eq!(
            validate_amount(None, "total").unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert_eq!(
            validate_amount(Some(-1.0), "total").unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert!(validate_amount(Some(f64::NAN), "total").is_err());
        assert!(validate_amount(Some(MAX_TOTAL + 1.0), "total").is_err());
    }
}
