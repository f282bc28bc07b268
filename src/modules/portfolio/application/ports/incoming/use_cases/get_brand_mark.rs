use std::ops::RangeInclusive;

use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::{BrandMark, BrandMarkKind, PortfolioQueryError};

/// Accepted edge length, in pixels, for a drawn mark.
pub const BRAND_MARK_SIZES: RangeInclusive<u32> = 16..=512;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBrandMarkError {
    #[error("Size {0} is outside 16..=512")]
    InvalidSize(u32),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<PortfolioQueryError> for GetBrandMarkError {
    fn from(err: PortfolioQueryError) -> Self {
        match err {
            PortfolioQueryError::Unavailable(msg) => GetBrandMarkError::ConfigError(msg),
        }
    }
}

#[async_trait]
pub trait GetBrandMarkUseCase: Send + Sync {
    /// `Ok(None)` when the drawing surface yields nothing.
    async fn execute(
        &self,
        kind: BrandMarkKind,
        size: Option<u32>,
    ) -> Result<Option<BrandMark>, GetBrandMarkError>;
}
