//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO for the request payload that creates or replaces it

pub mod analytics;
pub mod blog_post;
pub mod car;
pub mod lead;
pub mod status_check;
pub mod testimonial;

/// Serde default for `is_active` / `is_published` flags.
pub(crate) fn default_true() -> bool {
    true
}
