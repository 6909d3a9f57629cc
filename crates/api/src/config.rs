use turnio_core::signup::FlowConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Bearer token the confirmation-email function endpoint expects.
    /// When absent the endpoint rejects every request.
    pub confirmation_token: Option<String>,
    /// Signup flow variant configuration.
    pub flow: FlowConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `HOST`                          | `0.0.0.0`               |
    /// | `PORT`                          | `3000`                  |
    /// | `CORS_ORIGINS`                  | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                    |
    /// | `CONFIRMATION_FN_TOKEN`         | — (endpoint disabled)   |
    /// | `SIGNUP_RECORD_EMAIL_STEP`      | `false`                 |
    /// | `SIGNUP_COLLECT_NAME`           | `true`                  |
    /// | `SIGNUP_COLLECT_PROFESSION`     | `true`                  |
    /// | `SIGNUP_COLLECT_PREFERRED_PLAN` | `false`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let confirmation_token = std::env::var("CONFIRMATION_FN_TOKEN").ok();

        let flow = FlowConfig {
            record_email_step: env_bool("SIGNUP_RECORD_EMAIL_STEP", false),
            collect_name: env_bool("SIGNUP_COLLECT_NAME", true),
            collect_profession: env_bool("SIGNUP_COLLECT_PROFESSION", true),
            collect_preferred_plan: env_bool("SIGNUP_COLLECT_PREFERRED_PLAN", false),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            confirmation_token,
            flow,
        }
    }
}

/// Parse a boolean env var, accepting `1`/`true`/`yes` (case-insensitive).
fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
