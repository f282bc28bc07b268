use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};
use crate::portfolio::domain::entities::PortfolioConfig;

/// Serves the configuration loaded at startup. It is never reloaded or
/// mutated, so every request sees the same snapshot.
#[derive(Clone)]
pub struct StaticPortfolioQuery {
    config: Arc<PortfolioConfig>,
}

impl StaticPortfolioQuery {
    pub fn new(config: Arc<PortfolioConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PortfolioQuery for StaticPortfolioQuery {
    async fn fetch(&self) -> Result<Arc<PortfolioConfig>, PortfolioQueryError> {
        Ok(Arc::clone(&self.config))
    }
}
