//! Best-effort dispatch across both notification channels.
//!
//! [`Dispatcher`] owns whichever channels were configured at process
//! start and implements the workflow's
//! [`ConfirmationDispatcher`](turnio_core::signup::ConfirmationDispatcher)
//! seam. Channel errors become [`DispatchOutcome::Failed`] and a warning
//! log line; they never propagate, so a dead relay can't fail a signup.

use async_trait::async_trait;
use turnio_core::dispatch::{DispatchOutcome, DispatchReport};
use turnio_core::signup::{Confirmation, ConfirmationDispatcher};

use crate::confirmation::{ConfirmationConfig, ConfirmationEmailClient};
use crate::form_relay::{FormRelayClient, FormRelayConfig};

/// Holds the configured notification channels.
pub struct Dispatcher {
    form_relay: Option<FormRelayClient>,
    confirmation: Option<ConfirmationEmailClient>,
}

impl Dispatcher {
    /// Create a dispatcher from explicit channels (used by tests).
    pub fn new(
        form_relay: Option<FormRelayClient>,
        confirmation: Option<ConfirmationEmailClient>,
    ) -> Self {
        Self {
            form_relay,
            confirmation,
        }
    }

    /// Build the dispatcher from the environment.
    ///
    /// Each channel with a missing credential is disabled here, once,
    /// with a warning; per-dispatch it then reports
    /// [`DispatchOutcome::Skipped`].
    pub fn from_env(http: &reqwest::Client) -> Self {
        let form_relay = match FormRelayConfig::from_env() {
            Some(config) => Some(FormRelayClient::new(config, http.clone())),
            None => {
                tracing::warn!("FORM_RELAY_ACCESS_KEY not set, form relay channel disabled");
                None
            }
        };

        let confirmation = match ConfirmationConfig::from_env() {
            Some(config) => Some(ConfirmationEmailClient::new(config, http.clone())),
            None => {
                tracing::warn!(
                    "CONFIRMATION_FN_URL / CONFIRMATION_FN_TOKEN not set, \
                     confirmation email channel disabled"
                );
                None
            }
        };

        Self {
            form_relay,
            confirmation,
        }
    }

    /// A dispatcher with every channel disabled.
    pub fn disabled() -> Self {
        Self {
            form_relay: None,
            confirmation: None,
        }
    }
}

#[async_trait]
impl ConfirmationDispatcher for Dispatcher {
    async fn dispatch(&self, confirmation: &Confirmation) -> DispatchReport {
        let form_relay = match &self.form_relay {
            None => DispatchOutcome::Skipped("channel not configured".to_string()),
            Some(client) => match client.send(confirmation).await {
                Ok(()) => DispatchOutcome::Dispatched,
                Err(err) => {
                    tracing::warn!(
                        email = %confirmation.email,
                        error = %err,
                        "Form relay dispatch failed"
                    );
                    DispatchOutcome::Failed(err.to_string())
                }
            },
        };

        let outcome = match &self.confirmation {
            None => DispatchOutcome::Skipped("channel not configured".to_string()),
            Some(client) => match client.send(confirmation).await {
                Ok(()) => DispatchOutcome::Dispatched,
                Err(err) => {
                    tracing::warn!(
                        email = %confirmation.email,
                        error = %err,
                        "Confirmation email dispatch failed"
                    );
                    DispatchOutcome::Failed(err.to_string())
                }
            },
        };

        DispatchReport {
            form_relay,
            confirmation: outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation() -> Confirmation {
        Confirmation {
            email: "ana@clinic.co".to_string(),
            promo_code: None,
            name: None,
            profession: None,
            preferred_plan: None,
        }
    }

    #[tokio::test]
    async fn disabled_channels_are_skipped() {
        let dispatcher = Dispatcher::disabled();
        let report = dispatcher.dispatch(&confirmation()).await;

        assert!(matches!(report.form_relay, DispatchOutcome::Skipped(_)));
        assert!(matches!(report.confirmation, DispatchOutcome::Skipped(_)));
    }

    #[tokio::test]
    async fn unreachable_channel_reports_failure_not_error() {
        // Port 9 on localhost is not listening; the send must come back
        // as a Failed outcome rather than unwinding.
        let http = crate::http_client();
        let client = ConfirmationEmailClient::new(
            ConfirmationConfig {
                url: "http://127.0.0.1:9/functions/v1/send-confirmation-email".to_string(),
                token: "test-token".to_string(),
            },
            http,
        );
        let dispatcher = Dispatcher::new(None, Some(client));

        let report = dispatcher.dispatch(&confirmation()).await;

        assert!(matches!(report.form_relay, DispatchOutcome::Skipped(_)));
        assert!(matches!(report.confirmation, DispatchOutcome::Failed(_)));
    }
}
