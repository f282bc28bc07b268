// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::domain::entities::PortfolioConfig;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Portfolio configuration unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only access to the loaded configuration)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// The configuration is shared, never copied per request.
    async fn fetch(&self) -> Result<Arc<PortfolioConfig>, PortfolioQueryError>;
}
