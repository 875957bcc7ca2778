use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; without `REDIS_URL` the service keeps its data in memory.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub redis_url: Option<String>,
    pub store_key_prefix: String,
    /// Pins the random draw used for off-topic answers.
    pub scoring_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            redis_url: None,
            store_key_prefix: "interview".to_string(),
            scoring_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            redis_url: lookup("REDIS_URL").filter(|v| !v.trim().is_empty()),
            store_key_prefix: lookup("STORE_KEY_PREFIX").unwrap_or(defaults.store_key_prefix),
            scoring_seed: lookup("SCORING_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("SCORING_SEED must be an unsigned integer")?,
        })
    }
}
