//! Request extractors.
//!
//! Both extractors fold failures into the API's own error model instead of
//! axum's plain-text rejections.

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tracing::debug;

/// JSON request body that never rejects.
///
/// Holds `None` when the body could not be read, carries a non-JSON content
/// type, is not valid JSON, or does not match `T`. Handlers decide which
/// error that means for them.
#[derive(Debug)]
pub struct JsonBody<T>(pub Option<T>);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            debug!("Ignoring body with non-JSON content type");
            return Ok(Self(None));
        }

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(error = %err, "Failed to read request body");
                return Ok(Self(None));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(Some(value))),
            Err(err) => {
                debug!(error = %err, "Request body is not valid JSON");
                Ok(Self(None))
            }
        }
    }
}

/// A missing content type is accepted; otherwise it must be JSON.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE) else {
        return true;
    };

    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Post id taken from the `:id` path segment.
///
/// Only ASCII letters, digits, `_` and `-` are accepted. Any other segment
/// does not name a post route at all and yields the generic 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostIdParam(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PostIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;

        if is_valid_post_id(&id) {
            Ok(Self(id))
        } else {
            debug!("Rejected malformed post id segment");
            Err(ApiError::RouteNotFound)
        }
    }
}

/// One or more word characters or hyphens
pub fn is_valid_post_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
