//! Route definitions for the confirmation-email function.
//!
//! Mounted at `/functions/v1` by `function_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::confirmation;
use crate::state::AppState;

/// Confirmation function routes.
///
/// ```text
/// POST   /send-confirmation-email    -> send_confirmation_email
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/send-confirmation-email",
        post(confirmation::send_confirmation_email),
    )
}
