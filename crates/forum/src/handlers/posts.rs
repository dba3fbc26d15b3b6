//! Post CRUD handlers.
//!
//! These handlers are thin: they validate input at the boundary, call the
//! repository (the cached decorator handles cache-aside reads, invalidation,
//! and event publishing), and shape the response envelope.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};

use forum_core::post::Post;

use crate::{
    handlers::{ApiError, ApiResponse},
    models::CreatePost,
    state::AppState,
    trace::TraceId,
};

/// List published posts (GET /posts).
///
/// Cache-aside: served from cache when a fresh listing snapshot exists,
/// otherwise loaded from the store and cached for the configured TTL.
pub async fn list_posts(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
) -> Result<Json<ApiResponse<Vec<Post>>>, ApiError> {
    let posts = state
        .posts
        .list_published()
        .await
        .map_err(|e| ApiError::from_repository(e, &trace_id))?;

    Ok(ApiResponse::ok(posts, &trace_id))
}

/// Get a single post by ID (GET /posts/{id}).
pub async fn get_post(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Post>>, ApiError> {
    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::from_repository(e, &trace_id))?
        .ok_or_else(|| ApiError::not_found(id, &trace_id))?;

    Ok(ApiResponse::ok(post, &trace_id))
}

/// Create a new post (POST /posts).
///
/// Input is validated here, before the write path runs; the write path
/// itself performs insert, cache invalidation, and event publish in order.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    payload: Result<Json<CreatePost>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Post>>), ApiError> {
    let Json(payload) = payload
        .map_err(|e| ApiError::bad_request(format!("failed to parse body: {e}"), &trace_id))?;

    let new_post = payload
        .into_new_post()
        .map_err(|e| ApiError::validation(&e, &trace_id))?;

    let post = state
        .posts
        .insert(new_post)
        .await
        .map_err(|e| ApiError::from_repository(e, &trace_id))?;

    tracing::info!(post_id = post.id, trace_id = %trace_id.as_str(), "Created new post");

    Ok((StatusCode::CREATED, ApiResponse::ok(post, &trace_id)))
}

/// Delete a post by ID (DELETE /posts/{id}).
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .posts
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repository(e, &trace_id))?;

    tracing::info!(post_id = id, trace_id = %trace_id.as_str(), "Deleted post");

    Ok(ApiResponse::ok((), &trace_id))
}
