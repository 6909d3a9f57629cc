use std::sync::Arc;

use crate::config::ServerConfig;
use crate::sessions::SignupSessions;
use turnio_db::PgLeadStore;
use turnio_notify::{Dispatcher, ResendClient};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: turnio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Lead persistence gateway.
    pub store: Arc<PgLeadStore>,
    /// Best-effort notification dispatcher (both channels).
    pub dispatcher: Arc<Dispatcher>,
    /// Email provider client for the confirmation function endpoint.
    /// `None` when `RESEND_API_KEY` is absent.
    pub resend: Option<Arc<ResendClient>>,
    /// In-flight signup sessions.
    pub sessions: Arc<SignupSessions>,
}
