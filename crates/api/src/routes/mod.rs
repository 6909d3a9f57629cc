//! Route definitions.

pub mod confirmation;
pub mod health;
pub mod signup;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /signup/email                    POST  submit email, open session
/// /signup/{session_id}/discount    POST  record discount decision
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(signup::router())
}

/// Build the `/functions/v1` route tree (mirrors the original edge
/// function deployment path).
///
/// ```text
/// /send-confirmation-email         POST  render + relay confirmation
/// ```
pub fn function_routes() -> Router<AppState> {
    Router::new().merge(confirmation::router())
}
