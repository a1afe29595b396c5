//! Repository for the legacy `status_checks` table.

use consorcio_core::types::new_doc_id;
use sqlx::PgPool;

use crate::models::status_check::{CreateStatusCheck, StatusCheck};

/// Maximum rows returned by [`StatusCheckRepo::list`].
const LIST_LIMIT: i64 = 1000;

pub struct StatusCheckRepo;

impl StatusCheckRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateStatusCheck,
    ) -> Result<StatusCheck, sqlx::Error> {
        sqlx::query_as::<_, StatusCheck>(
            "INSERT INTO status_checks (id, client_name)
             VALUES ($1, $2)
             RETURNING id, client_name, timestamp",
        )
        .bind(new_doc_id())
        .bind(&input.client_name)
        .fetch_one(pool)
        .await
    }

    /// Oldest first, capped at [`LIST_LIMIT`] rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<StatusCheck>, sqlx::Error> {
        sqlx::query_as::<_, StatusCheck>(
            "SELECT id, client_name, timestamp FROM status_checks
             ORDER BY timestamp, id
             LIMIT $1",
        )
        .bind(LIST_LIMIT)
        .fetch_all(pool)
        .await
    }
}
