//! Repository for the `blog_posts` table.

use consorcio_core::types::new_doc_id;
use sqlx::{PgExecutor, PgPool};

use crate::models::blog_post::{BlogPost, SaveBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, excerpt, slug, category, read_time, published_at, content, is_published";

pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a post, generating an id when the payload has none.
    ///
    /// Fails with a unique violation (`uq_blog_posts_slug`) on a reused slug.
    pub async fn create<'e, E>(executor: E, input: &SaveBlogPost) -> Result<BlogPost, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let id = input.id.clone().unwrap_or_else(new_doc_id);
        let query = format!(
            "INSERT INTO blog_posts (id, title, excerpt, slug, category, read_time, \
                                     published_at, content, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.excerpt)
            .bind(&input.slug)
            .bind(&input.category)
            .bind(&input.read_time)
            .bind(input.published_at)
            .bind(&input.content)
            .bind(input.is_published)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published post by slug. Unpublished posts are invisible here.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND is_published");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List published posts, most recently published first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE is_published ORDER BY published_at DESC, id"
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Replace every content field of the post with `id`.
    ///
    /// Returns `true` only if the stored document changed.
    pub async fn replace(
        pool: &PgPool,
        id: &str,
        input: &SaveBlogPost,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_posts SET
                title = $2, excerpt = $3, slug = $4, category = $5, read_time = $6,
                published_at = $7, content = $8, is_published = $9
             WHERE id = $1
               AND (title, excerpt, slug, category, read_time, published_at, content,
                    is_published)
                   IS DISTINCT FROM
                   ($2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.excerpt)
        .bind(&input.slug)
        .bind(&input.category)
        .bind(&input.read_time)
        .bind(input.published_at)
        .bind(&input.content)
        .bind(input.is_published)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
