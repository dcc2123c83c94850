//! Configuration for the posts API server.
//!
//! All configuration is loaded from environment variables, optionally
//! seeded from a `.env` file by the binary. Nothing here changes the shape
//! of the HTTP API; it only selects the listen address, the home page
//! variant and the environment label exposed by `/api/env`.

use serde::Serialize;

/// Default request body cap (64 KiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,

    /// Server port
    pub port: u16,

    /// Deployment identifier, set by the hosting platform in production
    pub deployment_id: Option<String>,

    /// Which body `GET /` serves
    pub home_page: HomePage,

    /// Maximum accepted request body in bytes (default: 64KB)
    pub max_body_size: usize,
}

/// Variant of the page served at `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomePage {
    /// Blog demo page that renders posts fetched from `/api/posts`
    #[default]
    Html,
    /// Plain-text welcome line
    Text,
}

impl HomePage {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "minimal" | "plain" => HomePage::Text,
            _ => HomePage::Html,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HomePage::Html => "html",
            HomePage::Text => "text",
        }
    }
}

/// Deployment environment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),

            deployment_id: std::env::var("DEPLOYMENT_ID")
                .or_else(|_| std::env::var("VERCEL_DEPLOYMENT_ID"))
                .ok()
                .filter(|id| !id.is_empty()),

            home_page: std::env::var("HOME_PAGE")
                .map(|v| HomePage::parse(&v))
                .unwrap_or_default(),

            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),
        }
    }

    /// `production` when a deployment id is present, `development` otherwise
    pub fn environment(&self) -> Environment {
        if self.deployment_id.is_some() {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
