use std::path::{Path, PathBuf};

use tracing::info;

use crate::portfolio::domain::entities::PortfolioConfig;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed portfolio configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid portfolio configuration: {0}")]
    Invalid(String),
}

/// Reads and validates the portfolio JSON. Called once at startup.
pub async fn load_portfolio(path: impl AsRef<Path>) -> Result<PortfolioConfig, PortfolioLoadError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PortfolioLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let config = parse_portfolio(&raw)?;
    info!(
        path = %path.display(),
        name = %config.personal.name,
        "Loaded portfolio configuration"
    );
    Ok(config)
}

pub fn parse_portfolio(raw: &str) -> Result<PortfolioConfig, PortfolioLoadError> {
    let config: PortfolioConfig = serde_json::from_str(raw)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &PortfolioConfig) -> Result<(), PortfolioLoadError> {
    if config.personal.name.trim().is_empty() {
        return Err(PortfolioLoadError::Invalid(
            "personal.name must not be empty".to_string(),
        ));
    }

    if let Some(skill) = config
        .skills
        .iter()
        .find(|s| s.level.is_some_and(|level| level > 100))
    {
        return Err(PortfolioLoadError::Invalid(format!(
            "skill '{}' has a level above 100",
            skill.name
        )));
    }

    Ok(())
}
