//! Data models for the posts API.
//!
//! `Post` is the only stored record. Everything else here is a request or
//! response body. Field names are camelCase on the wire.

use crate::config::Environment;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Post identifier (opaque string)
pub type PostId = String;

/// Author used when a post is created without one
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Current time at the precision timestamps are exchanged with (milliseconds)
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier, fixed at creation
    pub id: PostId,

    pub title: String,

    pub content: String,

    pub author: String,

    /// When the post was created
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,

    /// When the post was last updated; absent until the first update
    #[serde(
        serialize_with = "serialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a post with a fresh random id and the current creation time
    pub fn new(title: String, content: String, author: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            created_at: now(),
            updated_at: None,
        }
    }

    /// Build the replacement record for an update.
    ///
    /// Each field takes the submitted value when it is a non-empty string and
    /// keeps the current value otherwise. `id` and `created_at` never change;
    /// `updated_at` is always set to now.
    pub fn revise(&self, changes: UpdatePostRequest) -> Self {
        Self {
            id: self.id.clone(),
            title: non_empty(changes.title).unwrap_or_else(|| self.title.clone()),
            content: non_empty(changes.content).unwrap_or_else(|| self.content.clone()),
            author: non_empty(changes.author).unwrap_or_else(|| self.author.clone()),
            created_at: self.created_at,
            updated_at: Some(now()),
        }
    }
}

/// Treat an empty string the same as an absent value
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Posts present at process start
pub fn seed_posts() -> Vec<Post> {
    let created_at = now();
    vec![
        Post {
            id: "1".to_string(),
            title: "Welcome to the Blog".to_string(),
            content: "This is the first post on this blog. The API behind it keeps \
                      every post in memory, so anything you add disappears when the \
                      server restarts."
                .to_string(),
            author: "Admin".to_string(),
            created_at,
            updated_at: None,
        },
        Post {
            id: "2".to_string(),
            title: "Getting Started with the Posts API".to_string(),
            content: "List posts with GET /api/posts, create one with POST /api/posts, \
                      and read, update or delete a single post at /api/posts/{id}."
                .to_string(),
            author: "Admin".to_string(),
            created_at,
            updated_at: None,
        },
    ]
}

// === API Request/Response Models ===

/// Create post request
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Update post request. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Post list response
#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// Single post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post: Post,
}

/// Delete post response, carrying the removed record
#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub message: &'static str,
    pub post: Post,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Server time response
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub time: String,
    pub unix: i64,
}

/// Environment echo response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentResponse {
    pub environment: Environment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// RFC 3339 with millisecond precision and a `Z` suffix
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(value))
}

fn serialize_optional_timestamp<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_str(&format_timestamp(value)),
        None => serializer.serialize_none(),
    }
}
