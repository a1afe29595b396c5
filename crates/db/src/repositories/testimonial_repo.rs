//! Repository for the `testimonials` table.

use consorcio_core::types::new_doc_id;
use sqlx::{PgExecutor, PgPool};

use crate::models::testimonial::{SaveTestimonial, Testimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, car, image, testimonial, rating, contemplated, \
                       months_to_contemplate, is_active";

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial, generating an id when the payload has none.
    pub async fn create<'e, E>(
        executor: E,
        input: &SaveTestimonial,
    ) -> Result<Testimonial, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let id = input.id.clone().unwrap_or_else(new_doc_id);
        let query = format!(
            "INSERT INTO testimonials (id, name, city, car, image, testimonial, rating, \
                                       contemplated, months_to_contemplate, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.car)
            .bind(&input.image)
            .bind(&input.testimonial)
            .bind(input.rating)
            .bind(input.contemplated)
            .bind(input.months_to_contemplate)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active testimonials in insertion order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_active ORDER BY inserted_at, id"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace every content field of the testimonial with `id`.
    ///
    /// Returns `true` only if the stored document changed.
    pub async fn replace(
        pool: &PgPool,
        id: &str,
        input: &SaveTestimonial,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE testimonials SET
                name = $2, city = $3, car = $4, image = $5, testimonial = $6,
                rating = $7, contemplated = $8, months_to_contemplate = $9, is_active = $10
             WHERE id = $1
               AND (name, city, car, image, testimonial, rating, contemplated,
                    months_to_contemplate, is_active)
                   IS DISTINCT FROM
                   ($2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.car)
        .bind(&input.image)
        .bind(&input.testimonial)
        .bind(input.rating)
        .bind(input.contemplated)
        .bind(input.months_to_contemplate)
        .bind(input.is_active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
