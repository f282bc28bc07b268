use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetBrandMarkError, GetBrandMarkUseCase, BRAND_MARK_SIZES,
};
use crate::portfolio::application::ports::outgoing::{
    BrandMark, BrandMarkKind, BrandMarkRenderer, PortfolioQuery,
};

pub struct GetBrandMarkService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
    renderer: Arc<dyn BrandMarkRenderer>,
}

impl<Q> GetBrandMarkService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q, renderer: Arc<dyn BrandMarkRenderer>) -> Self {
        Self { query, renderer }
    }
}

#[async_trait]
impl<Q> GetBrandMarkUseCase for GetBrandMarkService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        kind: BrandMarkKind,
        size: Option<u32>,
    ) -> Result<Option<BrandMark>, GetBrandMarkError> {
        let size = size.unwrap_or_else(|| kind.default_size());
        if !BRAND_MARK_SIZES.contains(&size) {
            return Err(GetBrandMarkError::InvalidSize(size));
        }

        let config = self.query.fetch().await?;
        let initials = config.personal.normalized_initials();

        let mark = self.renderer.draw(kind, &initials, size);
        if mark.is_none() {
            debug!(%kind, "Brand mark renderer produced nothing");
        }
        Ok(mark)
    }
}
