//! Repository for the write-only analytics tables (`page_views`,
//! `form_interactions`) and the dashboard aggregates built on top of them.

use consorcio_core::analytics::POPULAR_MODELS_LIMIT;
use consorcio_core::types::new_doc_id;
use sqlx::PgPool;

use crate::models::analytics::{
    DashboardSummary, FormInteraction, FormInteractionParams, ModelPopularity, PageView,
    PageViewParams,
};
use crate::repositories::LeadRepo;

pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Record a page view.
    pub async fn log_page_view(
        pool: &PgPool,
        params: &PageViewParams,
    ) -> Result<PageView, sqlx::Error> {
        sqlx::query_as::<_, PageView>(
            "INSERT INTO page_views (id, page, user_agent, ip)
             VALUES ($1, $2, $3, $4)
             RETURNING id, page, user_agent, ip, timestamp",
        )
        .bind(new_doc_id())
        .bind(&params.page)
        .bind(&params.user_agent)
        .bind(&params.ip)
        .fetch_one(pool)
        .await
    }

    /// Record a form interaction with its free-form `details` object.
    pub async fn log_form_interaction(
        pool: &PgPool,
        params: &FormInteractionParams,
        details: &serde_json::Value,
    ) -> Result<FormInteraction, sqlx::Error> {
        sqlx::query_as::<_, FormInteraction>(
            "INSERT INTO form_interactions (id, form_type, action, details)
             VALUES ($1, $2, $3, $4)
             RETURNING id, form_type, action, details, timestamp",
        )
        .bind(new_doc_id())
        .bind(&params.form_type)
        .bind(&params.action)
        .bind(details)
        .fetch_one(pool)
        .await
    }

    pub async fn count_page_views(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM page_views")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn count_form_interactions(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM form_interactions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Vehicle models ranked by number of leads, highest first.
    ///
    /// Ties keep whatever order the database produces.
    pub async fn popular_models(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<ModelPopularity>, sqlx::Error> {
        sqlx::query_as::<_, ModelPopularity>(
            "SELECT model, COUNT(*) AS count FROM leads
             GROUP BY model
             ORDER BY count DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Assemble the dashboard counters and the top lead models.
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        Ok(DashboardSummary {
            total_leads: LeadRepo::count(pool).await?,
            total_page_views: Self::count_page_views(pool).await?,
            total_form_interactions: Self::count_form_interactions(pool).await?,
            popular_cars: Self::popular_models(pool, POPULAR_MODELS_LIMIT).await?,
        })
    }
}
