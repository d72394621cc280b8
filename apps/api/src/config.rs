use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL for user accounts. Accounts live in memory when unset.
    pub database_url: Option<String>,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// HMAC secret for signing session tokens.
    pub secret_key: String,
    pub token_ttl_hours: i64,
    pub cors_allowed_origin: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            secret_key: require_env("SECRET_KEY")?,
            token_ttl_hours: optional_env("TOKEN_TTL_HOURS")
                .unwrap_or_else(|| "24".to_string())
                .parse::<i64>()
                .context("TOKEN_TTL_HOURS must be a whole number of hours")?,
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN"),
            port: optional_env("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
