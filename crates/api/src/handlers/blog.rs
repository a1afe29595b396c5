//! Handlers for the `/blog/posts` resource.

use axum::extract::{Path, State};
use axum::Json;
use consorcio_db::models::blog_post::{BlogPost, SaveBlogPost};
use consorcio_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/blog/posts
pub async fn list_published(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/blog/posts/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found("Post", slug))?;
    Ok(Json(post))
}

/// POST /api/blog/posts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SaveBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::write_failed("Blog post", e))?;
    tracing::info!(post_id = %post.id, slug = %post.slug, "Blog post created");
    Ok(Json(post))
}

/// PUT /api/blog/posts/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<SaveBlogPost>,
) -> AppResult<Json<MessageResponse>> {
    let replaced = BlogPostRepo::replace(&state.pool, &id, &input)
        .await
        .map_err(|e| AppError::update_failed("Blog post", e))?;
    if !replaced {
        return Err(AppError::not_found("Blog post", id));
    }
    Ok(Json(MessageResponse::new("Blog post updated successfully")))
}
