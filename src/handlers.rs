//! HTTP request handlers for the posts API.
//!
//! Each handler turns one request into store operations and a response.
//! Failures come back as [`ApiError`], which renders the JSON error body.

use crate::config::{Config, HomePage};
use crate::error::{ApiError, INVALID_BODY, MISSING_FIELDS};
use crate::extract::{JsonBody, PostIdParam};
use crate::models::*;
use crate::pages;
use crate::store::PostStore;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<PostStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

// === Health Check ===

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// === Demo Routes ===

/// GET / - Demo blog page or plain-text welcome, depending on config
pub async fn home(State(state): State<AppState>) -> Response {
    match state.config.home_page {
        HomePage::Html => Html(pages::INDEX_HTML).into_response(),
        HomePage::Text => pages::WELCOME_TEXT.into_response(),
    }
}

/// GET /api/time - Current server time
pub async fn current_time() -> Json<TimeResponse> {
    let now = now();
    Json(TimeResponse {
        time: format_timestamp(&now),
        unix: now.timestamp(),
    })
}

/// GET /api/env - Deployment environment label
pub async fn environment(State(state): State<AppState>) -> Json<EnvironmentResponse> {
    Json(EnvironmentResponse {
        environment: state.config.environment(),
        deployment_id: state.config.deployment_id.clone(),
    })
}

// === Posts ===

/// GET /api/posts - List all posts in insertion order
pub async fn list_posts(State(state): State<AppState>) -> Json<PostsResponse> {
    let posts = state.store.list().await;
    debug!(count = posts.len(), "Listing posts");
    Json(PostsResponse { posts })
}

/// GET /api/posts/:id - Fetch one post
pub async fn get_post(
    State(state): State<AppState>,
    PostIdParam(id): PostIdParam,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state
        .store
        .find_by_id(&id)
        .await
        .ok_or(ApiError::PostNotFound)?;

    Ok(Json(PostResponse { post }))
}

/// POST /api/posts - Create a post
///
/// `title` and `content` must be non-empty strings. `author` falls back to
/// "Anonymous". A body that is not JSON counts as missing both fields.
pub async fn create_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let req = body.unwrap_or_default();

    let (Some(title), Some(content)) = (non_empty(req.title), non_empty(req.content)) else {
        warn!("Create rejected: missing title or content");
        return Err(ApiError::InvalidInput(MISSING_FIELDS));
    };

    let post = Post::new(title, content, non_empty(req.author));
    state.store.append(post.clone()).await;

    info!(post_id = %post.id, "Post created");

    Ok((StatusCode::CREATED, Json(PostResponse { post })))
}

/// PUT /api/posts/:id - Update a post
///
/// Fields missing from the body, or submitted as empty strings, keep their
/// current value. An unknown id is reported before a bad body.
pub async fn update_post(
    State(state): State<AppState>,
    PostIdParam(id): PostIdParam,
    JsonBody(body): JsonBody<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let Some(changes) = body else {
        if !state.store.contains(&id).await {
            return Err(ApiError::PostNotFound);
        }
        warn!(post_id = %id, "Update rejected: invalid body");
        return Err(ApiError::InvalidInput(INVALID_BODY));
    };

    let post = state
        .store
        .update_with(&id, |current| current.revise(changes))
        .await?;

    info!(post_id = %post.id, "Post updated");

    Ok(Json(PostResponse { post }))
}

/// DELETE /api/posts/:id - Delete a post and return it
pub async fn delete_post(
    State(state): State<AppState>,
    PostIdParam(id): PostIdParam,
) -> Result<Json<DeletePostResponse>, ApiError> {
    let post = state.store.remove(&id).await?;

    info!(post_id = %post.id, "Post deleted");

    Ok(Json(DeletePostResponse {
        message: "Post deleted successfully",
        post,
    }))
}

// === Fallback ===

/// Any method or path without a route
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
