//! Analytics event models and dashboard aggregates.

use consorcio_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_views` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageView {
    pub id: DocId,
    pub page: String,
    pub user_agent: String,
    pub ip: String,
    pub timestamp: Timestamp,
}

/// A row from the `form_interactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormInteraction {
    pub id: DocId,
    pub form_type: String,
    pub action: String,
    pub details: serde_json::Value,
    pub timestamp: Timestamp,
}

/// Query parameters for `POST /api/analytics/page-view`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageViewParams {
    pub page: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub ip: String,
}

/// Query parameters for `POST /api/analytics/form-interaction`.
#[derive(Debug, Clone, Deserialize)]
pub struct FormInteractionParams {
    pub form_type: String,
    pub action: String,
}

/// Lead count for one vehicle model.
///
/// Serialized with the `_id` key the landing page dashboard already reads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModelPopularity {
    #[serde(rename = "_id")]
    pub model: String,
    pub count: i64,
}

/// Response body for `GET /api/analytics/dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_leads: i64,
    pub total_page_views: i64,
    pub total_form_interactions: i64,
    pub popular_cars: Vec<ModelPopularity>,
}
