use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    /// Simulated spider startup time before the crawl begins
    pub crawl_startup_delay: Duration,
    /// Simulated crawl duration
    pub crawl_duration: Duration,
    /// CORS origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            crawl_startup_delay: Duration::from_millis(
                env::var("CRAWL_STARTUP_DELAY_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .context("CRAWL_STARTUP_DELAY_MS must be a number of milliseconds")?,
            ),
            crawl_duration: Duration::from_millis(
                env::var("CRAWL_DURATION_MS")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .context("CRAWL_DURATION_MS must be a number of milliseconds")?,
            ),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
