//! Handlers for the two-step signup flow.
//!
//! Step 1 (`submit_email`) validates the email, creates a session, and
//! answers with the session ID the client must carry into step 2.
//! Step 2 (`choose_discount`) records the discount decision, persists
//! the lead, and fires the confirmation notifications. Submission
//! failures leave the session at the discount choice so the client can
//! retry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use turnio_core::signup::{LeadProfile, SignupSession, SignupWorkflow};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /signup/email
// ---------------------------------------------------------------------------

/// Step-1 request body.
#[derive(Debug, Deserialize)]
pub struct SubmitEmailRequest {
    pub email: String,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub preferred_plan: Option<String>,
}

/// Step-1 response payload.
#[derive(Debug, Serialize)]
pub struct SubmitEmailResponse {
    pub session_id: Uuid,
    /// The normalized (trimmed, lowercased) email that was recorded.
    pub email: String,
}

/// Submit an email address and open a signup session.
pub async fn submit_email(
    State(state): State<AppState>,
    Json(input): Json<SubmitEmailRequest>,
) -> AppResult<impl IntoResponse> {
    let mut session = SignupSession::new();
    let profile = LeadProfile {
        name: input.name,
        profession: input.profession,
        preferred_plan: input.preferred_plan,
    };

    let email = SignupWorkflow::new(
        &mut session,
        state.store.as_ref(),
        state.dispatcher.as_ref(),
        &state.config.flow,
    )
    .submit_email(&input.email, profile)
    .await?;

    let session_id = state.sessions.insert(session);

    tracing::info!(%session_id, email = %email, "Signup session opened");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmitEmailResponse { session_id, email },
        }),
    ))
}

// ---------------------------------------------------------------------------
// POST /signup/:session_id/discount
// ---------------------------------------------------------------------------

/// Step-2 request body.
#[derive(Debug, Deserialize)]
pub struct DiscountChoiceRequest {
    pub wants_discount: bool,
}

/// Step-2 response payload.
#[derive(Debug, Serialize)]
pub struct DiscountChoiceResponse {
    /// The issued promo code; present iff the lead opted in.
    pub promo_code: Option<String>,
}

/// Record the discount decision and complete the signup.
pub async fn choose_discount(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<DiscountChoiceRequest>,
) -> AppResult<impl IntoResponse> {
    let mut session = state
        .sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("signup session {session_id} not found")))?;

    let result = SignupWorkflow::new(
        &mut session,
        state.store.as_ref(),
        state.dispatcher.as_ref(),
        &state.config.flow,
    )
    .choose_discount(input.wants_discount)
    .await;

    // Whatever the outcome, keep the session's (possibly unchanged)
    // state so a failed submission stays retryable.
    state.sessions.update(&session_id, session);

    let outcome = result?;

    Ok(Json(DataResponse {
        data: DiscountChoiceResponse {
            promo_code: outcome.promo_code,
        },
    }))
}
