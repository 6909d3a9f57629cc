//! HTTP handlers, grouped by concern.

pub mod confirmation;
pub mod signup;
