//! Lead entity model and DTOs.

use std::collections::BTreeMap;

use consorcio_core::leads::default_source;
use consorcio_core::types::{DocId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DocId,
    pub name: String,
    pub whatsapp: String,
    pub city: String,
    pub model: String,
    pub source: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for a form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub whatsapp: String,
    pub city: String,
    /// Vehicle model of interest. Free text, not checked against the catalog.
    pub model: String,
    #[serde(default = "default_source")]
    pub source: String,
}

/// Query parameters for `PUT /api/leads/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadStatusParams {
    pub status: String,
}

/// Aggregate counters returned by `GET /api/leads/stats`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeadStats {
    pub total: i64,
    pub new: i64,
    pub contacted: i64,
    pub converted: i64,
    pub by_source: BTreeMap<String, i64>,
}
