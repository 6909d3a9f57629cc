//! Resend-compatible email sender.
//!
//! Final hop of the confirmation channel: the function endpoint renders
//! subject and HTML and hands them to this client, which posts
//! `{from, to, subject, html}` to the provider and expects a JSON body
//! carrying the created email's identifier.

use serde::{Deserialize, Serialize};

/// Default provider endpoint.
const DEFAULT_RESEND_URL: &str = "https://api.resend.com/emails";

/// Default sender identity.
const DEFAULT_FROM: &str = "Turnio <noreply@turnio.rebaseit.tech>";

/// Error type for provider send failures.
#[derive(Debug, thiserror::Error)]
pub enum ResendError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("email provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("email provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Configuration for the provider client.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Bearer API key.
    pub api_key: String,
    /// Send endpoint URL.
    pub url: String,
    /// RFC 5322 "From" identity.
    pub from: String,
}

impl ResendConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `RESEND_API_KEY` is not set, signalling that
    /// the confirmation function cannot send and should answer with
    /// "email service not configured".
    ///
    /// | Variable         | Required | Default                                 |
    /// |------------------|----------|-----------------------------------------|
    /// | `RESEND_API_KEY` | yes      | —                                       |
    /// | `RESEND_URL`     | no       | `https://api.resend.com/emails`         |
    /// | `RESEND_FROM`    | no       | `Turnio <noreply@turnio.rebaseit.tech>` |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok()?;
        Some(Self {
            api_key,
            url: std::env::var("RESEND_URL").unwrap_or_else(|_| DEFAULT_RESEND_URL.to_string()),
            from: std::env::var("RESEND_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Sends rendered emails through the provider HTTP API.
pub struct ResendClient {
    config: ResendConfig,
    http: reqwest::Client,
}

impl ResendClient {
    /// Create a new client with the given configuration and HTTP client.
    pub fn new(config: ResendConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Send one email, returning the provider-assigned identifier.
    pub async fn send(&self, to: &str, subject: &str, html: &str) -> Result<String, ResendError> {
        let response = self
            .http
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&SendEmailRequest {
                from: &self.config.from,
                to,
                subject,
                html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SendEmailResponse = response.json().await?;
        tracing::info!(to, email_id = %parsed.id, "Email sent via provider");
        Ok(parsed.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_returns_none_without_api_key() {
        std::env::remove_var("RESEND_API_KEY");
        assert!(ResendConfig::from_env().is_none());
    }

    #[test]
    fn status_error_display_includes_body() {
        let err = ResendError::Status {
            status: 422,
            body: "invalid to address".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "email provider returned HTTP 422: invalid to address"
        );
    }
}
