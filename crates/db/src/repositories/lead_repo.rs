//! Repository for the `leads` table.
//!
//! Writes are upserts keyed on the email column: a repeated signup
//! updates the existing row in place instead of raising to the caller.
//! [`PgLeadStore`] wraps the repo behind the core
//! [`LeadStore`](turnio_core::signup::LeadStore) seam and classifies any
//! residual unique violation as a non-fatal conflict.

use async_trait::async_trait;
use sqlx::PgPool;
use turnio_core::signup::{LeadDraft, LeadStore, StoreError};

use crate::models::lead::Lead;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, wants_discount, promo_code, name, profession, \
                        preferred_plan, created_at, updated_at";

/// Provides write and lookup operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Upsert a lead keyed on its email, returning the resulting row.
    ///
    /// On conflict the discount fields are overwritten, `updated_at` is
    /// stamped, and profile fields are only replaced when the new write
    /// actually carries them.
    pub async fn upsert(pool: &PgPool, draft: &LeadDraft) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (email, wants_discount, promo_code, name, profession, preferred_plan)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (email) DO UPDATE SET
                wants_discount = EXCLUDED.wants_discount,
                promo_code = EXCLUDED.promo_code,
                name = COALESCE(EXCLUDED.name, leads.name),
                profession = COALESCE(EXCLUDED.profession, leads.profession),
                preferred_plan = COALESCE(EXCLUDED.preferred_plan, leads.preferred_plan),
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&draft.email)
            .bind(draft.wants_discount)
            .bind(&draft.promo_code)
            .bind(&draft.name)
            .bind(&draft.profession)
            .bind(&draft.preferred_plan)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its normalized email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE email = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}

/// Whether a sqlx error is a PostgreSQL unique constraint violation
/// (error code 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}

/// [`LeadStore`] implementation backed by a Postgres pool.
#[derive(Clone)]
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    /// Create a store over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert(&self, draft: &LeadDraft) -> Result<(), StoreError> {
        match LeadRepo::upsert(&self.pool, draft).await {
            Ok(_) => Ok(()),
            // The upsert absorbs email conflicts, but a concurrent
            // insert can still lose the race on the unique index.
            Err(err) if is_unique_violation(&err) => Err(StoreError::Conflict),
            Err(err) => {
                tracing::error!(error = %err, email = %draft.email, "Lead upsert failed");
                Err(StoreError::Unavailable(err.to_string()))
            }
        }
    }
}
