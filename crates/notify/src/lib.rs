//! Outbound email integrations for the Turnio early-access backend.
//!
//! Two independent, best-effort channels fire after a lead is
//! persisted: a form-relay notification (internal "new signup" mail)
//! and a transactional confirmation email to the lead, triggered
//! through a bearer-authorized function endpoint that relays via a
//! Resend-compatible API. Channel failures are reported through
//! [`DispatchOutcome`](turnio_core::dispatch::DispatchOutcome), never
//! raised.

pub mod confirmation;
pub mod dispatcher;
pub mod form_relay;
pub mod resend;
pub mod templates;

pub use dispatcher::Dispatcher;
pub use resend::ResendClient;

use std::time::Duration;

/// Bound on every outbound notification request.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the shared HTTP client used by all senders.
///
/// A timed-out send is a dispatch failure, not a hang: every request
/// carries [`SEND_TIMEOUT`].
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(SEND_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}
