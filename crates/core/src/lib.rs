//! Turnio early-access domain logic.
//!
//! Pure business rules for the pre-launch signup flow: email
//! normalization and validation, promo code generation, and the two-step
//! signup workflow state machine. Persistence and notification are
//! reached only through the [`signup::LeadStore`] and
//! [`signup::ConfirmationDispatcher`] trait seams, so this crate has no
//! I/O of its own.

pub mod dispatch;
pub mod email;
pub mod error;
pub mod promo;
pub mod signup;
pub mod types;
