use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Settings for the hosted completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

/// Application configuration loaded from environment variables.
/// Startup fails if the completion credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionConfig,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let completion = CompletionConfig {
            api_url: optional_env("COMPLETION_API_URL", DEFAULT_COMPLETION_API_URL),
            api_key: require_env("GROQ_API_KEY")?,
            model: optional_env("COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
            max_tokens: parse_env("COMPLETION_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            timeout: Duration::from_secs(parse_env(
                "COMPLETION_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        };

        Ok(Config {
            completion,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_env("PORT", 8080u16)?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        _ => Ok(default),
    }
}
