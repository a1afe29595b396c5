//! Car catalog model and DTOs.

use consorcio_core::types::DocId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::default_true;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DocId,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub image: String,
    /// Display string, e.g. `R$ 1.247`.
    pub monthly_price: String,
    /// Display string, e.g. `R$ 89.000`.
    pub total_credit: String,
    pub installments: i32,
    pub highlights: Vec<String>,
    pub description: String,
    pub is_active: bool,
}

/// Full car document used by both create and replace.
///
/// `id` is only honoured on create; a fresh UUID is generated when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCar {
    pub id: Option<DocId>,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub image: String,
    pub monthly_price: String,
    pub total_credit: String,
    pub installments: i32,
    pub highlights: Vec<String>,
    pub description: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
