//! Environment-driven configuration
//!
//! Every setting has a default; the value in effect is logged at startup.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

use crate::password::DEFAULT_ROUNDS;

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_DB: &str = "pixel_pets.db";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,http://127.0.0.1:5173,https://pixelpets.netlify.app,https://*.netlify.app";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub cors_origins: Vec<String>,
    /// Built UI to serve with an `index.html` fallback
    pub static_dir: Option<PathBuf>,
    pub pbkdf2_rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            db_path: PathBuf::from(DEFAULT_DB),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            static_dir: None,
            pbkdf2_rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Config {
    /// Read every setting. Runs before the logger exists, so it logs nothing
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("PIXEL_PETS_PORT", DEFAULT_PORT)?,
            db_path: try_load("PIXEL_PETS_DB", DEFAULT_DB)?,
            log_dir: try_load("PIXEL_PETS_LOG_DIR", DEFAULT_LOG_DIR)?,
            cors_origins: split_origins(&try_load::<String>(
                "PIXEL_PETS_CORS_ORIGINS",
                DEFAULT_CORS_ORIGINS,
            )?),
            static_dir: var("PIXEL_PETS_STATIC_DIR").map(PathBuf::from),
            pbkdf2_rounds: try_load("PIXEL_PETS_PBKDF2_ROUNDS", &DEFAULT_ROUNDS.to_string())?,
        })
    }

    /// Log the values in effect
    pub fn log_summary(&self) {
        info!(
            port = self.port,
            db = %self.db_path.display(),
            log_dir = %self.log_dir.display(),
            pbkdf2_rounds = self.pbkdf2_rounds,
            "Configuration loaded"
        );
        info!("CORS origins: {}", self.cors_origins.join(", "));
        match &self.static_dir {
            Some(dir) => info!("Serving UI from {}", dir.display()),
            None => info!("PIXEL_PETS_STATIC_DIR not set, API only"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins() {
        assert_eq!(
            split_origins(" http://a.dev , ,http://b.dev"),
            vec!["http://a.dev".to_string(), "http://b.dev".to_string()]
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins.len(), 4);
        assert!(config.cors_origins.iter().any(|o| o == "https://*.netlify.app"));
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_try_load_rejects_garbage() {
        // Unset key falls back to the (bad) default and fails to parse
        assert!(try_load::<u16>("PIXEL_PETS_TEST_UNSET_KEY", "not-a-port").is_err());
        assert_eq!(try_load::<u16>("PIXEL_PETS_TEST_UNSET_KEY", "9000").unwrap(), 9000);
    }
}
