use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default — the service is stateless and needs no
/// external endpoints.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Maximum input text length accepted by the pattern endpoint, chars.
    pub max_text_len: usize,
    /// Smallest book the service will generate patterns for, pages.
    pub min_book_pages: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_text_len: env_or("MAX_TEXT_LEN", 20)?,
            min_book_pages: env_or("MIN_BOOK_PAGES", 200)?,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid number")),
        Err(_) => Ok(default),
    }
}
