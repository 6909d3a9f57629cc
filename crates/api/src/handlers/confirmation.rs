//! Handler for the send-confirmation-email function endpoint.
//!
//! Server-side half of the confirmation channel: authorized callers
//! (the dispatcher in this process, or an external deployment of the
//! landing page) post the lead's details; the handler renders the
//! subject and HTML templates and relays through the email provider.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use turnio_core::email;
use turnio_notify::templates;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body, camelCase per the function's public contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendConfirmationRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub preferred_plan: Option<String>,
    pub promo_code: Option<String>,
}

/// Success response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendConfirmationResponse {
    pub success: bool,
    pub message: &'static str,
    /// Provider-assigned identifier of the sent email.
    pub email_id: String,
}

/// POST /functions/v1/send-confirmation-email
pub async fn send_confirmation_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<SendConfirmationRequest>,
) -> AppResult<impl IntoResponse> {
    authorize(&state, &headers)?;

    let raw_email = input
        .email
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Email is required".to_string()))?;
    let to = email::normalize(raw_email);

    let resend = state.resend.as_ref().ok_or(AppError::EmailNotConfigured)?;

    let promo_code = input.promo_code.as_deref();
    let subject = templates::email_subject(promo_code.is_some());
    let html = templates::email_html(promo_code);

    let email_id = resend
        .send(&to, subject, &html)
        .await
        .map_err(|err| AppError::EmailSend(err.to_string()))?;

    Ok(Json(SendConfirmationResponse {
        success: true,
        message: "Confirmation email sent successfully",
        email_id,
    }))
}

/// Check the bearer token against the configured secret.
///
/// An absent `CONFIRMATION_FN_TOKEN` disables the endpoint: no
/// presented token can match.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let expected = state
        .config
        .confirmation_token
        .as_deref()
        .ok_or_else(|| AppError::Unauthorized("confirmation endpoint is disabled".to_string()))?;

    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;

    if presented != expected {
        return Err(AppError::Unauthorized("invalid bearer token".to_string()));
    }

    Ok(())
}
