//! Lead entity model.

use serde::Serialize;
use sqlx::FromRow;
use turnio_core::types::{DbId, Timestamp};

/// A row from the `leads` table.
///
/// `promo_code` is only ever present when `wants_discount` is true; the
/// table enforces this with a check constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub email: String,
    pub wants_discount: bool,
    pub promo_code: Option<String>,
    pub name: Option<String>,
    pub profession: Option<String>,
    pub preferred_plan: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
