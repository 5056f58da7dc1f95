//! Client configuration loaded from environment variables.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary via `dotenvy`).
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `API_BASE_URL`: Base URL of the platform REST API (e.g. `https://learn.example.com/api/`)
//!
//! ## Optional Variables
//! - `RUST_LOG`: Logging level (default: "info,coursehub_client=debug")
//! - `API_TOKEN`: Bearer access token to start the session with
//! - `HTTP_TIMEOUT_SECONDS`: Per-request timeout, at least 1 (default: 15)
//! - `HTTP_USER_AGENT`: User-Agent header (default: "coursehub-client/<version>")
//! - `PAGE_SIZE`: Items per page served by the backend, at least 1 (default: 6)
//! - `CATALOG_LEVEL`: Initial catalog filter, "All" or a course level (default: "All")
//! - `CATALOG_SEARCH`: Initial catalog search term

use crate::domain::course::entity::CourseLevel;
use crate::domain::shared::pagination::{DEFAULT_PAGE_SIZE, Filter};
use crate::infrastructure::http::api_client::ApiSettings;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every endpoint path is resolved against
    pub api_base_url: String,

    /// Access token used until a login replaces it
    pub api_token: Option<String>,

    pub http_timeout_seconds: u64,

    pub http_user_agent: String,

    /// Fixed server-side page size; used to validate collection responses
    pub page_size: u32,

    pub catalog_level: Filter<CourseLevel>,

    pub catalog_search: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a variable is
    /// set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let page_size: u32 = at_least_one("PAGE_SIZE", env_or("PAGE_SIZE", DEFAULT_PAGE_SIZE)?)?;
        let http_timeout_seconds: u64 =
            at_least_one("HTTP_TIMEOUT_SECONDS", env_or("HTTP_TIMEOUT_SECONDS", 15)?)?;

        let catalog_level = match std::env::var("CATALOG_LEVEL") {
            Ok(value) => CourseLevel::parse_filter(&value)
                .map_err(|e| anyhow::anyhow!("Failed to parse CATALOG_LEVEL: {}", e))?,
            Err(_) => Filter::All,
        };

        Ok(Self {
            api_base_url: env_required("API_BASE_URL")?,
            api_token: env_optional("API_TOKEN"),
            http_timeout_seconds,
            http_user_agent: env_or(
                "HTTP_USER_AGENT",
                format!("coursehub-client/{}", env!("CARGO_PKG_VERSION")),
            )?,
            page_size,
            catalog_level,
            catalog_search: env_optional("CATALOG_SEARCH"),
        })
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(self.http_timeout_seconds),
            user_agent: self.http_user_agent.clone(),
        }
    }
}

/// Load a required environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an optional variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Rejects a zero count or duration.
///
/// # Errors
///
/// Returns an error naming `key` if `value` is zero.
fn at_least_one<T>(key: &str, value: T) -> anyhow::Result<T>
where
    T: PartialOrd + From<u8>,
{
    if value < T::from(1) {
        anyhow::bail!("{} must be at least 1", key);
    }
    Ok(value)
}
