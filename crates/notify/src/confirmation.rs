//! Transactional confirmation-email channel.
//!
//! The lead-facing confirmation mail is not sent directly: the client
//! posts the lead's details to a bearer-authorized server-side function
//! (this backend's own `/functions/v1/send-confirmation-email` route,
//! or a compatible external deployment), which renders the templates
//! and relays through the email provider.

use serde::Serialize;
use turnio_core::signup::Confirmation;

/// Error type for confirmation-trigger failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfirmationError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("confirmation email request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The function answered with a non-success status.
    #[error("confirmation email function returned HTTP {0}")]
    Status(u16),
}

/// Configuration for the confirmation-email channel.
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    /// Full URL of the send-confirmation-email function.
    pub url: String,
    /// Bearer token expected by the function.
    pub token: String,
}

impl ConfirmationConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless both variables are set, signalling that the
    /// channel is not configured and should be skipped.
    ///
    /// | Variable                  | Required |
    /// |---------------------------|----------|
    /// | `CONFIRMATION_FN_URL`     | yes      |
    /// | `CONFIRMATION_FN_TOKEN`   | yes      |
    pub fn from_env() -> Option<Self> {
        Some(Self {
            url: std::env::var("CONFIRMATION_FN_URL").ok()?,
            token: std::env::var("CONFIRMATION_FN_TOKEN").ok()?,
        })
    }
}

/// JSON body posted to the function. Field names follow the function's
/// camelCase contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRequest<'a> {
    pub email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_plan: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<&'a str>,
}

impl<'a> From<&'a Confirmation> for ConfirmationRequest<'a> {
    fn from(c: &'a Confirmation) -> Self {
        Self {
            email: &c.email,
            name: c.name.as_deref(),
            profession: c.profession.as_deref(),
            preferred_plan: c.preferred_plan.as_deref(),
            promo_code: c.promo_code.as_deref(),
        }
    }
}

/// Triggers the confirmation email through the function endpoint.
pub struct ConfirmationEmailClient {
    config: ConfirmationConfig,
    http: reqwest::Client,
}

impl ConfirmationEmailClient {
    /// Create a new client with the given configuration and HTTP client.
    pub fn new(config: ConfirmationConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Trigger the confirmation email for one lead.
    pub async fn send(&self, confirmation: &Confirmation) -> Result<(), ConfirmationError> {
        let response = self
            .http
            .post(&self.config.url)
            .bearer_auth(&self.config.token)
            .json(&ConfirmationRequest::from(confirmation))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ConfirmationError::Status(response.status().as_u16()));
        }

        tracing::info!(email = %confirmation.email, "Confirmation email triggered");
        Ok(())
    }
}
