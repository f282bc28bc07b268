use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetBrandMarkUseCase, GetPageLayoutUseCase, ResolveScrollStateUseCase,
};
use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_layout: Option<Arc<dyn GetPageLayoutUseCase + Send + Sync>>,
    resolve_scroll: Option<Arc<dyn ResolveScrollStateUseCase + Send + Sync>>,
    get_brand_mark: Option<Arc<dyn GetBrandMarkUseCase + Send + Sync>>,
    query: Option<Arc<dyn PortfolioQuery + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_layout: Some(Arc::new(StubGetPageLayoutUseCase)),
            resolve_scroll: Some(Arc::new(StubResolveScrollStateUseCase)),
            get_brand_mark: Some(Arc::new(StubGetBrandMarkUseCase)),
            query: Some(Arc::new(StubPortfolioQuery::error(
                PortfolioQueryError::Unavailable("not configured in this test".to_string()),
            ))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_layout(
        mut self,
        uc: impl GetPageLayoutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_layout = Some(Arc::new(uc));
        self
    }

    pub fn with_resolve_scroll(
        mut self,
        uc: impl ResolveScrollStateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_scroll = Some(Arc::new(uc));
        self
    }

    pub fn with_get_brand_mark(
        mut self,
        uc: impl GetBrandMarkUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_brand_mark = Some(Arc::new(uc));
        self
    }

    pub fn with_query(mut self, query: impl PortfolioQuery + Send + Sync + 'static) -> Self {
        self.query = Some(Arc::new(query));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get_layout: self.get_layout.expect("get_layout not set"),
                resolve_scroll: self.resolve_scroll.expect("resolve_scroll not set"),
                get_brand_mark: self.get_brand_mark.expect("get_brand_mark not set"),
                query: self.query.expect("query not set"),
            },
        })
    }
}
