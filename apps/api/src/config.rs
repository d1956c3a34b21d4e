use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent means the in-memory store is used.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Allowed CORS origin; permissive when unset.
    pub frontend_url: Option<String>,
    /// Largest `count` accepted by the comparisons endpoint.
    pub max_comparisons: i64,
    pub run_migrations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            frontend_url: None,
            max_comparisons: 100,
            run_migrations: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            frontend_url: optional_env("FRONTEND_URL"),
            max_comparisons: parse_env("MAX_COMPARISONS", defaults.max_comparisons)?,
            run_migrations: parse_env("RUN_MIGRATIONS", defaults.run_migrations)?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}
