//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default except the backend API URL; the host
//! app is expected to set `SPOTMEET_API_URL` before constructing the core.

use std::env;

/// Default daily allowance of AI-assist calls.
pub const DEFAULT_AI_ASSIST_DAILY_LIMIT: u32 = 50;
/// Default daily allowance of activity publishes.
pub const DEFAULT_ACTIVITY_PUBLISH_DAILY_LIMIT: u32 = 3;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API base URL (nearby, activities, assist endpoints)
    pub api_base_url: String,
    /// Daily AI-assist allowance
    pub ai_assist_daily_limit: u32,
    /// Daily activity-publish allowance
    pub activity_publish_daily_limit: u32,
    /// Default nearby search radius in meters
    pub default_radius_m: u32,
    /// Per-request HTTP timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_base_url: env::var("SPOTMEET_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("SPOTMEET_API_URL"))?,
            ai_assist_daily_limit: env::var("SPOTMEET_AI_ASSIST_DAILY_LIMIT")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_AI_ASSIST_DAILY_LIMIT),
            activity_publish_daily_limit: env::var("SPOTMEET_PUBLISH_DAILY_LIMIT")
                .unwrap_or_default()
                .parse()
                .unwrap_or(DEFAULT_ACTIVITY_PUBLISH_DAILY_LIMIT),
            default_radius_m: env::var("SPOTMEET_DEFAULT_RADIUS_M")
                .unwrap_or_default()
                .parse()
                .unwrap_or(crate::models::filter::DEFAULT_RADIUS_M),
            request_timeout_secs: env::var("SPOTMEET_REQUEST_TIMEOUT_SECS")
                .unwrap_or_default()
                .parse()
                .unwrap_or(10),
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ai_assist_daily_limit: DEFAULT_AI_ASSIST_DAILY_LIMIT,
            activity_publish_daily_limit: DEFAULT_ACTIVITY_PUBLISH_DAILY_LIMIT,
            default_radius_m: crate::models::filter::DEFAULT_RADIUS_M,
            request_timeout_secs: 2,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
