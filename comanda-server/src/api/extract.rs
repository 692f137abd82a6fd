//! JSON body extractor with the uniform error envelope
//!
//! `axum::Json` rejects malformed bodies with a plain-text response (and 415 /
//! 422 statuses). Handlers use [`JsonBody`] instead so every rejection becomes
//! a 400 `{success:false, code, message}` envelope.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::utils::{AppError, ErrorCode};

/// Drop-in replacement for `axum::Json` on the request side
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

/// Map a JSON rejection onto the error taxonomy
pub fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let code = match &rejection {
        // Syntactically valid JSON with the wrong shape (e.g. `"items": "x"`)
        JsonRejection::JsonDataError(_) => ErrorCode::ValidationFailed,
        _ => ErrorCode::InvalidRequest,
    };
    tracing::debug!(status = %rejection.status(), reason = %rejection.body_text(), "JSON body rejected");
    AppError::with_message(code, "Malformed JSON body").with_detail("reason", rejection.body_text())
}
