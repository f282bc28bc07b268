// src/shared/config.rs
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_ENV: &str = "development";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PORTFOLIO_CONFIG_PATH: &str = "config/portfolio.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub portfolio_config_path: PathBuf,
}

impl ServerConfig {
    /// Reads the process environment. Call after the `.env` files are loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("RUST_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.trim().is_empty() {
            return Err(ConfigError::Empty("HOST"));
        }

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let portfolio_config_path = lookup("PORTFOLIO_CONFIG_PATH")
            .unwrap_or_else(|| DEFAULT_PORTFOLIO_CONFIG_PATH.to_string());
        if portfolio_config_path.trim().is_empty() {
            return Err(ConfigError::Empty("PORTFOLIO_CONFIG_PATH"));
        }

        Ok(Self {
            env,
            host,
            port,
            portfolio_config_path: PathBuf::from(portfolio_config_path),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
