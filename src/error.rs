//! API error types and their JSON rendering.
//!
//! Every failure a handler can hit maps to a status code and an
//! `{"error": "..."}` body. Nothing escapes as a plain-text or 500 response.

use crate::models::ErrorResponse;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

/// Message for a create request without title or content
pub const MISSING_FIELDS: &str = "Title and content are required";

/// Message for an update request whose body is not JSON
pub const INVALID_BODY: &str = "Invalid request body";

/// API error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing required fields or unparseable body
    InvalidInput(&'static str),
    /// No post with the requested id
    PostNotFound,
    /// No route for this method and path
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::PostNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(msg) => *msg,
            ApiError::PostNotFound => "Post not found",
            ApiError::RouteNotFound => "Not Found",
        }
    }
}

/// Implement From<StoreError> to enable ? operator in handlers
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::PostNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = status.as_u16(), error = self.message(), "Request failed");

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_post_not_found() {
        let err: ApiError = StoreError::NotFound("abc".to_string()).into();
        assert_eq!(err, ApiError::PostNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Post not found");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::InvalidInput(MISSING_FIELDS).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.message(), "Not Found");
    }
}
