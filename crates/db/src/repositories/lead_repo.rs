//! Repository for the `leads` table.

use consorcio_core::leads::{
    count_for_status, STATUS_CONTACTED, STATUS_CONVERTED, STATUS_NEW,
};
use consorcio_core::types::new_doc_id;
use sqlx::PgPool;

use crate::models::lead::{CreateLead, Lead, LeadStats};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, whatsapp, city, model, source, status, created_at";

/// Provides lead intake, listing, status updates and aggregate counters.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead with a generated id and status `new`.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (id, name, whatsapp, city, model, source, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, clock_timestamp())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(new_doc_id())
            .bind(&input.name)
            .bind(&input.whatsapp)
            .bind(&input.city)
            .bind(&input.model)
            .bind(&input.source)
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }

    /// Find a lead by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every lead, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC, id");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// Set a lead's status. Any string is accepted.
    ///
    /// Returns `true` only if the row changed: an unknown id and a status
    /// equal to the current one both report `false`.
    pub async fn update_status(pool: &PgPool, id: &str, status: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE leads SET status = $2 WHERE id = $1 AND status IS DISTINCT FROM $2",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of leads.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Lead counts grouped by status, as `(status, count)` tuples.
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT status, COUNT(*) AS count FROM leads
             GROUP BY status
             ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Lead counts grouped by source, as `(source, count)` tuples.
    pub async fn count_by_source(pool: &PgPool) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT source, COUNT(*) AS count FROM leads
             GROUP BY source
             ORDER BY source",
        )
        .fetch_all(pool)
        .await
    }

    /// Assemble the counters served by the stats endpoint.
    pub async fn stats(pool: &PgPool) -> Result<LeadStats, sqlx::Error> {
        let total = Self::count(pool).await?;
        let by_status = Self::count_by_status(pool).await?;
        let by_source = Self::count_by_source(pool).await?;

        Ok(LeadStats {
            total,
            new: count_for_status(&by_status, STATUS_NEW),
            contacted: count_for_status(&by_status, STATUS_CONTACTED),
            converted: count_for_status(&by_status, STATUS_CONVERTED),
            by_source: by_source.into_iter().collect(),
        })
    }
}
