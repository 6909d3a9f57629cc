//! Domain error taxonomy.
//!
//! [`CoreError`] covers the outcomes the signup flow distinguishes for
//! its callers. Notification failures are deliberately absent: dispatch
//! is best-effort and reports through
//! [`DispatchOutcome`](crate::dispatch::DispatchOutcome) instead of an
//! error path.

/// Domain-level error for the signup flow.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// User input was malformed (e.g. an invalid email address).
    /// Recoverable by correcting the input and resubmitting.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The lead could not be persisted for a reason other than a
    /// uniqueness conflict. The step that failed is retryable.
    #[error("Submission error: {0}")]
    Submission(String),

    /// An invariant was broken inside the workflow itself.
    #[error("Internal error: {0}")]
    Internal(String),
}
