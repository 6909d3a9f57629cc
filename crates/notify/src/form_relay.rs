//! Form-relay notification channel.
//!
//! Posts a structured JSON payload to a Web3Forms-compatible endpoint
//! so the team gets a "new early-access signup" email for every
//! completed flow. Configuration is loaded from environment variables;
//! if `FORM_RELAY_ACCESS_KEY` is not set, [`FormRelayConfig::from_env`]
//! returns `None` and the channel is disabled.

use serde::Serialize;
use turnio_core::signup::Confirmation;

/// Default submit endpoint.
const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Sender name shown on relayed mail.
const FROM_NAME: &str = "Turnio";

/// Error type for form-relay send failures.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("form relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("form relay rejected the submission: HTTP {0}")]
    Status(u16),
}

/// Configuration for the form-relay channel.
#[derive(Debug, Clone)]
pub struct FormRelayConfig {
    /// Access key identifying the receiving form.
    pub access_key: String,
    /// Submit endpoint URL.
    pub url: String,
}

impl FormRelayConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `FORM_RELAY_ACCESS_KEY` is not set, signalling
    /// that the channel is not configured and should be skipped.
    ///
    /// | Variable                | Required | Default                            |
    /// |-------------------------|----------|------------------------------------|
    /// | `FORM_RELAY_ACCESS_KEY` | yes      | —                                  |
    /// | `FORM_RELAY_URL`        | no       | `https://api.web3forms.com/submit` |
    pub fn from_env() -> Option<Self> {
        let access_key = std::env::var("FORM_RELAY_ACCESS_KEY").ok()?;
        Some(Self {
            access_key,
            url: std::env::var("FORM_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),
        })
    }
}

/// JSON body accepted by the relay endpoint.
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    access_key: &'a str,
    from_name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: String,
}

/// Sends signup notifications through the form-relay endpoint.
pub struct FormRelayClient {
    config: FormRelayConfig,
    http: reqwest::Client,
}

impl FormRelayClient {
    /// Create a new client with the given configuration and HTTP client.
    pub fn new(config: FormRelayConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Send the signup notification for one confirmation.
    ///
    /// Only the response status is consumed; the relay's body schema is
    /// not part of the contract.
    pub async fn send(&self, confirmation: &Confirmation) -> Result<(), RelayError> {
        let payload = RelayPayload {
            access_key: &self.config.access_key,
            from_name: FROM_NAME,
            email: &confirmation.email,
            subject: "¡Bienvenido a Turnio Early Access!",
            message: relay_message(confirmation),
        };

        let response = self.http.post(&self.config.url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(RelayError::Status(response.status().as_u16()));
        }

        tracing::info!(email = %confirmation.email, "Form relay notification sent");
        Ok(())
    }
}

/// Free-text body embedding the collected profile and the promo code.
fn relay_message(confirmation: &Confirmation) -> String {
    let mut message = String::from(
        "¡Gracias por registrarte para el acceso anticipado a Turnio! Te mantendremos informado.",
    );

    if let Some(name) = &confirmation.name {
        message.push_str(&format!("\nNombre: {name}"));
    }
    if let Some(profession) = &confirmation.profession {
        message.push_str(&format!("\nProfesión: {profession}"));
    }
    if let Some(plan) = &confirmation.preferred_plan {
        message.push_str(&format!("\nPlan preferido: {plan}"));
    }
    if let Some(code) = &confirmation.promo_code {
        message.push_str(&format!("\nTu código es: {code}"));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation(promo: Option<&str>) -> Confirmation {
        Confirmation {
            email: "ana@clinic.co".to_string(),
            promo_code: promo.map(str::to_string),
            name: Some("Ana".to_string()),
            profession: Some("Dentista".to_string()),
            preferred_plan: None,
        }
    }

    #[test]
    fn message_embeds_profile_and_code() {
        let message = relay_message(&confirmation(Some("TURNIO10-ABCD1234")));
        assert!(message.contains("Nombre: Ana"));
        assert!(message.contains("Profesión: Dentista"));
        assert!(message.contains("Tu código es: TURNIO10-ABCD1234"));
    }

    #[test]
    fn message_omits_code_when_absent() {
        let message = relay_message(&confirmation(None));
        assert!(!message.contains("código es"));
    }

    #[test]
    fn from_env_returns_none_without_access_key() {
        std::env::remove_var("FORM_RELAY_ACCESS_KEY");
        assert!(FormRelayConfig::from_env().is_none());
    }
}
