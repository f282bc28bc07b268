use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::PortfolioQueryError;
use crate::portfolio::domain::sections::PageLayout;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPageLayoutError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<PortfolioQueryError> for GetPageLayoutError {
    fn from(err: PortfolioQueryError) -> Self {
        match err {
            PortfolioQueryError::Unavailable(msg) => GetPageLayoutError::ConfigError(msg),
        }
    }
}

#[async_trait]
pub trait GetPageLayoutUseCase: Send + Sync {
    async fn execute(&self) -> Result<PageLayout, GetPageLayoutError>;
}
