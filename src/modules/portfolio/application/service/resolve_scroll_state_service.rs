use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    ResolveScrollStateError, ResolveScrollStateUseCase,
};
use crate::portfolio::domain::policies::{ScrollState, ViewportMetrics};

#[derive(Debug, Default, Clone)]
pub struct ResolveScrollStateService;

impl ResolveScrollStateService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResolveScrollStateUseCase for ResolveScrollStateService {
    async fn execute(
        &self,
        metrics: ViewportMetrics,
    ) -> Result<ScrollState, ResolveScrollStateError> {
        if !metrics.is_well_formed() {
            return Err(ResolveScrollStateError::InvalidMetrics);
        }
        Ok(ScrollState::from_metrics(&metrics))
    }
}
