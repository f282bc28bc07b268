use std::sync::Arc;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetBrandMarkUseCase, GetPageLayoutUseCase, ResolveScrollStateUseCase,
};
use crate::portfolio::application::ports::outgoing::PortfolioQuery;

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_layout: Arc<dyn GetPageLayoutUseCase + Send + Sync>,
    pub resolve_scroll: Arc<dyn ResolveScrollStateUseCase + Send + Sync>,
    pub get_brand_mark: Arc<dyn GetBrandMarkUseCase + Send + Sync>,
    /// Backs the readiness probe.
    pub query: Arc<dyn PortfolioQuery + Send + Sync>,
}
