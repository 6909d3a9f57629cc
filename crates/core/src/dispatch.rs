//! Best-effort notification outcomes.
//!
//! Confirmation emails are a side channel: the business outcome (the
//! lead is on the list) is decided by persistence alone. These types
//! make the non-propagation explicit: a dispatch can fail, and callers
//! can observe and log that, but nothing here converts into an error.

use serde::Serialize;

/// Outcome of one notification channel for one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The channel accepted the payload.
    Dispatched,
    /// The channel is not configured; the send was skipped.
    Skipped(String),
    /// The send was attempted and failed.
    Failed(String),
}

impl DispatchOutcome {
    /// Whether the payload actually went out on this channel.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched)
    }
}

/// Per-channel outcomes for a single confirmation dispatch.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    /// Form-relay send (internal "new signup" notification).
    pub form_relay: DispatchOutcome,
    /// Transactional confirmation email to the lead.
    pub confirmation: DispatchOutcome,
}

impl DispatchReport {
    /// A report with every channel skipped for the same reason.
    pub fn all_skipped(reason: &str) -> Self {
        Self {
            form_relay: DispatchOutcome::Skipped(reason.to_string()),
            confirmation: DispatchOutcome::Skipped(reason.to_string()),
        }
    }
}
