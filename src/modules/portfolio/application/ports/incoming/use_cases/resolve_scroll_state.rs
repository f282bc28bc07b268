use async_trait::async_trait;

use crate::portfolio::domain::policies::{ScrollState, ViewportMetrics};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveScrollStateError {
    #[error("Viewport metrics must be finite and non-negative")]
    InvalidMetrics,
}

#[async_trait]
pub trait ResolveScrollStateUseCase: Send + Sync {
    async fn execute(&self, metrics: ViewportMetrics)
        -> Result<ScrollState, ResolveScrollStateError>;
}
