use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use turnio_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `turnio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid bearer credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A named resource (e.g. a signup session) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The email provider credential is absent; confirmation emails
    /// cannot be sent.
    #[error("Email service not configured")]
    EmailNotConfigured,

    /// The email provider rejected or failed the send.
    #[error("Failed to send confirmation email: {0}")]
    EmailSend(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Submission(msg) => {
                    tracing::error!(error = %msg, "Lead submission failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "SUBMISSION_ERROR",
                        "Could not save your signup. Please try again.".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::EmailNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_NOT_CONFIGURED",
                "Email service not configured".to_string(),
            ),
            AppError::EmailSend(msg) => {
                tracing::error!(error = %msg, "Confirmation email send failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EMAIL_SEND_FAILED",
                    "Failed to send confirmation email".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn core_validation_maps_to_400() {
        let err = AppError::Core(CoreError::Validation("bad email".into()));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn core_submission_maps_to_500() {
        let err = AppError::Core(CoreError::Submission("connection reset".into()));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn http_variants_map_to_their_statuses() {
        assert_eq!(
            status_of(AppError::BadRequest("missing field".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::Unauthorized("bad token".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::NotFound("no such session".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::EmailNotConfigured),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::EmailSend("provider 422".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
