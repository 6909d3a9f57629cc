//! Two-step signup workflow state machine.
//!
//! Step 1 collects and validates an email address (plus whichever
//! profile fields the flow variant collects). Step 2 asks whether the
//! lead wants a launch discount, persists the lead, and triggers the
//! confirmation notifications. [`SignupWorkflow`] owns the transition
//! rules; persistence and notification are reached through the
//! [`LeadStore`] and [`ConfirmationDispatcher`] seams so the machine is
//! testable without a database or network.
//!
//! Uniqueness conflicts from the store are success-equivalent: the
//! business intent ("this email is on the list") is already satisfied,
//! so a duplicate signup must never surface as a user-facing failure.

use async_trait::async_trait;

use crate::dispatch::DispatchReport;
use crate::email;
use crate::error::CoreError;
use crate::promo;

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Error from the lead persistence gateway.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unique-key violation on the lead's email. Idempotent retry
    /// semantics: the workflow treats this as success.
    #[error("lead already exists")]
    Conflict,

    /// Any other persistence failure. Fatal for the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Lead fields as written by the workflow.
///
/// `updated_at` is intentionally absent: the store stamps it on every
/// discount-mutating write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub email: String,
    pub wants_discount: bool,
    pub promo_code: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub preferred_plan: Option<String>,
}

impl LeadDraft {
    /// A step-1 placeholder row: email only, no discount opt-in.
    fn placeholder(email: &str, profile: &LeadProfile) -> Self {
        Self {
            email: email.to_string(),
            wants_discount: false,
            promo_code: None,
            name: profile.name.clone(),
            profession: profile.profession.clone(),
            preferred_plan: profile.preferred_plan.clone(),
        }
    }
}

/// Write-only persistence gateway for leads.
///
/// Implementations must report uniqueness violations on the email key as
/// [`StoreError::Conflict`] and everything else as
/// [`StoreError::Unavailable`].
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Persist a lead keyed on its normalized email.
    async fn insert(&self, draft: &LeadDraft) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Dispatcher seam
// ---------------------------------------------------------------------------

/// Payload for the post-persistence confirmation notifications.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub email: String,
    pub promo_code: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub preferred_plan: Option<String>,
}

/// Fire-and-forget notification sender.
///
/// Dispatch is infallible by type: channel failures are captured in the
/// returned [`DispatchReport`], never raised. The workflow logs the
/// report and completes regardless of what it says.
#[async_trait]
pub trait ConfirmationDispatcher: Send + Sync {
    async fn dispatch(&self, confirmation: &Confirmation) -> DispatchReport;
}

// ---------------------------------------------------------------------------
// Flow configuration
// ---------------------------------------------------------------------------

/// Consolidated configuration for the signup page variants.
///
/// The landing page shipped several near-identical forms differing only
/// in which profile fields they collected and whether a tentative lead
/// row was written already at the email step. One workflow covers all of
/// them, parameterized here.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Write a `wants_discount = false` placeholder row at step 1.
    pub record_email_step: bool,
    /// Collect the lead's name.
    pub collect_name: bool,
    /// Collect the lead's profession.
    pub collect_profession: bool,
    /// Collect the lead's preferred plan.
    pub collect_preferred_plan: bool,
}

impl Default for FlowConfig {
    /// The main landing-page flow: nothing written until the discount
    /// choice, name and profession collected.
    fn default() -> Self {
        Self {
            record_email_step: false,
            collect_name: true,
            collect_profession: true,
            collect_preferred_plan: false,
        }
    }
}

/// Optional profile fields submitted alongside the email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadProfile {
    pub name: Option<String>,
    pub profession: Option<String>,
    pub preferred_plan: Option<String>,
}

impl LeadProfile {
    /// Drop the fields this flow variant does not collect.
    fn filtered(mut self, flow: &FlowConfig) -> Self {
        if !flow.collect_name {
            self.name = None;
        }
        if !flow.collect_profession {
            self.profession = None;
        }
        if !flow.collect_preferred_plan {
            self.preferred_plan = None;
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Position of a UI session in the two-step flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    /// Waiting for a valid email (step 1).
    AwaitingEmail,
    /// Email accepted; waiting for the discount decision (step 2).
    AwaitingDiscountChoice,
    /// Terminal. The lead is recorded and notifications were attempted.
    Completed,
}

/// Per-session form state held between the two steps.
#[derive(Debug, Clone)]
pub struct SignupSession {
    step: SignupStep,
    email: Option<String>,
    profile: LeadProfile,
}

impl SignupSession {
    /// A fresh session at the start of the flow.
    pub fn new() -> Self {
        Self {
            step: SignupStep::AwaitingEmail,
            email: None,
            profile: LeadProfile::default(),
        }
    }

    /// Current step.
    pub fn step(&self) -> SignupStep {
        self.step
    }

    /// The normalized email recorded at step 1, if any.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl Default for SignupSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a completed discount choice.
#[derive(Debug, Clone)]
pub struct DiscountOutcome {
    /// The generated promo code, present iff the lead opted in.
    pub promo_code: Option<String>,
    /// Per-channel notification outcomes (already logged; informational).
    pub dispatch: DispatchReport,
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// Drives one [`SignupSession`] through the two-step flow.
pub struct SignupWorkflow<'a> {
    session: &'a mut SignupSession,
    store: &'a dyn LeadStore,
    dispatcher: &'a dyn ConfirmationDispatcher,
    flow: &'a FlowConfig,
}

impl<'a> SignupWorkflow<'a> {
    /// Bind a workflow to a session and its collaborators.
    pub fn new(
        session: &'a mut SignupSession,
        store: &'a dyn LeadStore,
        dispatcher: &'a dyn ConfirmationDispatcher,
        flow: &'a FlowConfig,
    ) -> Self {
        Self {
            session,
            store,
            dispatcher,
            flow,
        }
    }

    /// Step 1: validate and record the email, advance to the discount
    /// choice.
    ///
    /// Returns the normalized email. On [`CoreError::Validation`] the
    /// session does not advance. When the flow records the email step, a
    /// placeholder lead (`wants_discount = false`) is written; a store
    /// conflict means the email is already on the list and is not an
    /// error.
    pub async fn submit_email(
        &mut self,
        raw_email: &str,
        profile: LeadProfile,
    ) -> Result<String, CoreError> {
        if self.session.step != SignupStep::AwaitingEmail {
            return Err(CoreError::Validation(
                "Email was already submitted for this session".to_string(),
            ));
        }

        let email = email::normalize_and_validate(raw_email)?;
        let profile = profile.filtered(self.flow);

        if self.flow.record_email_step {
            let draft = LeadDraft::placeholder(&email, &profile);
            self.persist(&draft).await?;
        }

        self.session.email = Some(email.clone());
        self.session.profile = profile;
        self.session.step = SignupStep::AwaitingDiscountChoice;

        tracing::debug!(email = %email, "Signup email accepted");
        Ok(email)
    }

    /// Step 2: record the discount decision, persist the lead, and fire
    /// the confirmation notifications.
    ///
    /// On success the session is `Completed` and the outcome carries the
    /// promo code (for opt-ins) plus the notification report. On
    /// [`CoreError::Submission`] the session stays at the discount
    /// choice so the caller can retry; no notification is attempted.
    pub async fn choose_discount(
        &mut self,
        wants_discount: bool,
    ) -> Result<DiscountOutcome, CoreError> {
        if self.session.step != SignupStep::AwaitingDiscountChoice {
            return Err(CoreError::Validation(
                "Discount choice is not pending for this session".to_string(),
            ));
        }

        let email = self
            .session
            .email
            .clone()
            .ok_or_else(|| CoreError::Internal("session has no email".to_string()))?;

        let promo_code = wants_discount.then(promo::generate);

        let draft = LeadDraft {
            email: email.clone(),
            wants_discount,
            promo_code: promo_code.clone(),
            name: self.session.profile.name.clone(),
            profession: self.session.profile.profession.clone(),
            preferred_plan: self.session.profile.preferred_plan.clone(),
        };
        self.persist(&draft).await?;

        // Persistence succeeded: the lead is recorded and the outcome is
        // authoritative from here on. Notifications are best-effort.
        let confirmation = Confirmation {
            email: email.clone(),
            promo_code: promo_code.clone(),
            name: self.session.profile.name.clone(),
            profession: self.session.profile.profession.clone(),
            preferred_plan: self.session.profile.preferred_plan.clone(),
        };
        let dispatch = self.dispatcher.dispatch(&confirmation).await;

        tracing::info!(
            email = %email,
            wants_discount,
            form_relay = ?dispatch.form_relay,
            confirmation = ?dispatch.confirmation,
            "Signup completed"
        );

        self.session.step = SignupStep::Completed;
        Ok(DiscountOutcome {
            promo_code,
            dispatch,
        })
    }

    /// Write a lead, treating a uniqueness conflict as success.
    async fn persist(&self, draft: &LeadDraft) -> Result<(), CoreError> {
        match self.store.insert(draft).await {
            Ok(()) => Ok(()),
            Err(StoreError::Conflict) => {
                tracing::info!(email = %draft.email, "Lead already registered, proceeding");
                Ok(())
            }
            Err(StoreError::Unavailable(reason)) => {
                tracing::error!(email = %draft.email, error = %reason, "Failed to persist lead");
                Err(CoreError::Submission(reason))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
