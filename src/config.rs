use std::env;
use secrecy::SecretString;

use crate::{
    errors::{AppError, AppResult},
    services::session_store::DEFAULT_SESSION_IDLE_MINUTES,
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const APP_TITLE: &str = "AI-Powered Study Buddy";
pub const APP_ICON: &str = "📚";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub generation_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub session_idle_minutes: i64,
    pub app_title: String,
    pub app_icon: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` has no default: without it no feature can be served,
    /// so the caller is expected to abort startup on the returned error.
    pub fn from_env() -> AppResult<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(
                    "Please set your GEMINI_API_KEY in the .env file".to_string(),
                )
            })?;

        Ok(Self {
            gemini_api_key: SecretString::from(gemini_api_key),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            generation_timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(60),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            session_idle_minutes: env::var("SESSION_IDLE_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m: &i64| *m > 0)
                .unwrap_or(DEFAULT_SESSION_IDLE_MINUTES),
            app_title: APP_TITLE.to_string(),
            app_icon: APP_ICON.to_string(),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test-gemini-key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            generation_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            app_title: APP_TITLE.to_string(),
            app_icon: APP_ICON.to_string(),
        }
    }
}
