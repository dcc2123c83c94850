//! # Posts API
//!
//! Minimal HTTP service exposing CRUD over an in-memory collection of blog
//! posts, plus a few demo routes.
//!
//! ## Design Principles
//!
//! - **In-memory only**: posts live in one ordered list and reset on restart
//! - **Injected state**: the store is owned by [`AppState`], not a global
//! - **Structured errors**: every failure is an `{"error": "..."}` JSON body
//! - **Permissive CORS**: any origin may call the JSON API
//!
//! ## API Overview
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/` | GET | Demo page (HTML or plain text) |
//! | `/health` | GET | Health check |
//! | `/api/time` | GET | Server time |
//! | `/api/env` | GET | Environment label |
//! | `/api/posts` | GET | List posts |
//! | `/api/posts` | POST | Create post |
//! | `/api/posts/:id` | GET | Fetch post |
//! | `/api/posts/:id` | PUT | Update post |
//! | `/api/posts/:id` | DELETE | Delete post |
//! | any | OPTIONS | CORS preflight |

pub mod config;
pub mod cors;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use handlers::AppState;
pub use store::PostStore;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the Axum router with all endpoints and middleware.
///
/// A method that is not routed on a known path answers like an unknown
/// path, with the generic JSON 404. CORS handling wraps the whole route
/// table, so `OPTIONS` never reaches route or method matching.
pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    let routes = Router::new()
        // Demo routes
        .route("/", get(handlers::home).fallback(handlers::not_found))
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .route(
            "/api/time",
            get(handlers::current_time).fallback(handlers::not_found),
        )
        .route(
            "/api/env",
            get(handlers::environment).fallback(handlers::not_found),
        )
        // Posts
        .route(
            "/api/posts",
            get(handlers::list_posts)
                .post(handlers::create_post)
                .fallback(handlers::not_found),
        )
        .route(
            "/api/posts/:id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post)
                .fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body_size))
        .with_state(state);

    cors::wrap(routes).layer(TraceLayer::new_for_http())
}
