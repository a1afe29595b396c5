//! Customer testimonial model and DTOs.

use consorcio_core::types::DocId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::default_true;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DocId,
    pub name: String,
    pub city: String,
    /// Vehicle the customer received, e.g. `T-Cross 2024`.
    pub car: String,
    pub image: String,
    pub testimonial: String,
    pub rating: i32,
    pub contemplated: bool,
    pub months_to_contemplate: i32,
    pub is_active: bool,
}

/// Full testimonial document used by both create and replace.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveTestimonial {
    pub id: Option<DocId>,
    pub name: String,
    pub city: String,
    pub car: String,
    pub image: String,
    pub testimonial: String,
    pub rating: i32,
    pub contemplated: bool,
    pub months_to_contemplate: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
