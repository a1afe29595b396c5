//! Blog post model and DTOs.

use consorcio_core::types::{deserialize_timestamp, DocId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::default_true;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DocId,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub category: String,
    /// Display string, e.g. `5 min`.
    pub read_time: String,
    pub published_at: Timestamp,
    pub content: String,
    pub is_published: bool,
}

/// Full blog post document used by both create and replace.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveBlogPost {
    pub id: Option<DocId>,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub category: String,
    pub read_time: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub published_at: Timestamp,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_true")]
    pub is_published: bool,
}
