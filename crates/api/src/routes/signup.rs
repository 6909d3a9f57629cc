//! Route definitions for the two-step signup flow.
//!
//! Mounted at `/signup` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::signup;
use crate::state::AppState;

/// Signup routes.
///
/// ```text
/// POST   /signup/email                    -> submit_email
/// POST   /signup/{session_id}/discount    -> choose_discount
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup/email", post(signup::submit_email))
        .route(
            "/signup/{session_id}/discount",
            post(signup::choose_discount),
        )
}
