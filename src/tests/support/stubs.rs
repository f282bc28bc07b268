use std::sync::Arc;

use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetBrandMarkError, GetBrandMarkUseCase, GetPageLayoutError, GetPageLayoutUseCase,
    ResolveScrollStateError, ResolveScrollStateUseCase,
};
use crate::portfolio::application::ports::outgoing::{
    BrandMark, BrandMarkKind, BrandMarkRenderer, PortfolioQuery, PortfolioQueryError,
};
use crate::portfolio::domain::entities::PortfolioConfig;
use crate::portfolio::domain::policies::{ScrollState, ViewportMetrics};
use crate::portfolio::domain::sections::PageLayout;

/* --------------------------------------------------
 * Outgoing ports
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubPortfolioQuery {
    result: Result<Arc<PortfolioConfig>, PortfolioQueryError>,
}

impl StubPortfolioQuery {
    pub fn found(config: PortfolioConfig) -> Self {
        Self {
            result: Ok(Arc::new(config)),
        }
    }

    pub fn error(err: PortfolioQueryError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl PortfolioQuery for StubPortfolioQuery {
    async fn fetch(&self) -> Result<Arc<PortfolioConfig>, PortfolioQueryError> {
        self.result.clone()
    }
}

/// `echo` draws `"{kind}:{initials}:{size}"` so tests can see exactly what
/// was requested; `blank` never draws anything.
#[derive(Clone)]
pub struct StubBrandMarkRenderer {
    draws: bool,
}

impl StubBrandMarkRenderer {
    pub fn echo() -> Self {
        Self { draws: true }
    }

    pub fn blank() -> Self {
        Self { draws: false }
    }
}

impl BrandMarkRenderer for StubBrandMarkRenderer {
    fn draw(&self, kind: BrandMarkKind, initials: &str, size: u32) -> Option<BrandMark> {
        self.draws.then(|| BrandMark {
            content_type: "text/plain",
            bytes: format!("{}:{}:{}", kind, initials, size).into_bytes(),
        })
    }
}

/* --------------------------------------------------
 * Use cases (defaults for TestAppStateBuilder)
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetPageLayoutUseCase;

#[async_trait]
impl GetPageLayoutUseCase for StubGetPageLayoutUseCase {
    async fn execute(&self) -> Result<PageLayout, GetPageLayoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResolveScrollStateUseCase;

#[async_trait]
impl ResolveScrollStateUseCase for StubResolveScrollStateUseCase {
    async fn execute(
        &self,
        _metrics: ViewportMetrics,
    ) -> Result<ScrollState, ResolveScrollStateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetBrandMarkUseCase;

#[async_trait]
impl GetBrandMarkUseCase for StubGetBrandMarkUseCase {
    async fn execute(
        &self,
        _kind: BrandMarkKind,
        _size: Option<u32>,
    ) -> Result<Option<BrandMark>, GetBrandMarkError> {
        unimplemented!("Not used in this test")
    }
}
