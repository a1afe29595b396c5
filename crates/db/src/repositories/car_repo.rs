//! Repository for the `cars` table.

use consorcio_core::types::new_doc_id;
use sqlx::{PgExecutor, PgPool};

use crate::models::car::{Car, SaveCar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, model, year, image, monthly_price, total_credit, \
                       installments, highlights, description, is_active";

/// Provides catalog CRUD for cars. Rows are never hard-deleted.
pub struct CarRepo;

impl CarRepo {
    /// Insert a car, generating an id when the payload has none.
    pub async fn create<'e, E>(executor: E, input: &SaveCar) -> Result<Car, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let id = input.id.clone().unwrap_or_else(new_doc_id);
        let query = format!(
            "INSERT INTO cars (id, name, model, year, image, monthly_price, total_credit, \
                               installments, highlights, description, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.image)
            .bind(&input.monthly_price)
            .bind(&input.total_credit)
            .bind(input.installments)
            .bind(&input.highlights)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    /// Find a car by id, active or not.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active cars in insertion order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars WHERE is_active ORDER BY inserted_at, id"
        );
        sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
    }

    /// Number of car rows, including inactive ones.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Replace every content field of the car with `id`. The payload id is ignored.
    ///
    /// Returns `true` only if the stored document changed.
    pub async fn replace(pool: &PgPool, id: &str, input: &SaveCar) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars SET
                name = $2, model = $3, year = $4, image = $5, monthly_price = $6,
                total_credit = $7, installments = $8, highlights = $9,
                description = $10, is_active = $11
             WHERE id = $1
               AND (name, model, year, image, monthly_price, total_credit,
                    installments, highlights, description, is_active)
                   IS DISTINCT FROM
                   ($2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.image)
        .bind(&input.monthly_price)
        .bind(&input.total_credit)
        .bind(input.installments)
        .bind(&input.highlights)
        .bind(&input.description)
        .bind(input.is_active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a car by clearing `is_active`.
    ///
    /// Returns `true` if an active row was deactivated.
    pub async fn soft_delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE cars SET is_active = FALSE WHERE id = $1 AND is_active")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
