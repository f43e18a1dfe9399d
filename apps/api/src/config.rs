use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the generative resume endpoint is only
/// called when `GEMINI_API_KEY` is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: Option<String>,
    pub search_debounce: Duration,
    pub login_delay: Duration,
    pub portfolio_delay: Duration,
    /// Idle time after which a search session is dropped.
    pub search_session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            gemini_api_key: None,
            gemini_api_url: None,
            search_debounce: Duration::from_millis(500),
            login_delay: Duration::from_millis(1000),
            portfolio_delay: Duration::from_millis(3000),
            search_session_ttl: Duration::from_secs(600),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_api_url: optional_env("GEMINI_API_URL"),
            search_debounce: millis_env("SEARCH_DEBOUNCE_MS", defaults.search_debounce)?,
            login_delay: millis_env("LOGIN_DELAY_MS", defaults.login_delay)?,
            portfolio_delay: millis_env("PORTFOLIO_DELAY_MS", defaults.portfolio_delay)?,
            search_session_ttl: millis_env("SEARCH_SESSION_TTL_MS", defaults.search_session_ttl)?,
        })
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn millis_env(key: &str, default: Duration) -> Result<Duration> {
    match optional_env(key) {
        Some(raw) => parse_millis(&raw).with_context(|| format!("{key} must be a whole number of milliseconds")),
        None => Ok(default),
    }
}

fn parse_millis(raw: &str) -> Result<Duration> {
    let ms = raw.parse::<u64>()?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_timings() {
        let config = Config::default();
        assert_eq!(config.search_debounce, Duration::from_millis(500));
        assert_eq!(config.login_delay, Duration::from_millis(1000));
        assert_eq!(config.portfolio_delay, Duration::from_millis(3000));
        assert_eq!(config.search_session_ttl, Duration::from_secs(600));
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("250").unwrap(), Duration::from_millis(250));
        assert!(parse_millis("soon").is_err());
        assert!(parse_millis("-5").is_err());
    }
}
