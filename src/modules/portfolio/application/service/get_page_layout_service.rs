use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Datelike, Utc};
use tracing::debug;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetPageLayoutError, GetPageLayoutUseCase,
};
use crate::portfolio::application::ports::outgoing::{
    BrandMarkKind, BrandMarkRenderer, PortfolioQuery,
};
use crate::portfolio::domain::entities::PortfolioConfig;
use crate::portfolio::domain::policies::SectionVisibility;
use crate::portfolio::domain::sections::{compose_page, PageLayout, RenderContext};

/// Edge length of the favicon embedded in the page's icon links.
pub const PAGE_FAVICON_SIZE: u32 = 64;

pub struct GetPageLayoutService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
    brand: Arc<dyn BrandMarkRenderer>,
}

impl<Q> GetPageLayoutService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q, brand: Arc<dyn BrandMarkRenderer>) -> Self {
        Self { query, brand }
    }

    fn favicon_href(&self, config: &PortfolioConfig) -> Option<String> {
        let initials = config.personal.normalized_initials();
        let mark = self
            .brand
            .draw(BrandMarkKind::Favicon, &initials, PAGE_FAVICON_SIZE)?;
        Some(format!(
            "data:{};base64,{}",
            mark.content_type,
            STANDARD.encode(&mark.bytes)
        ))
    }
}

#[async_trait]
impl<Q> GetPageLayoutUseCase for GetPageLayoutService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PageLayout, GetPageLayoutError> {
        let config = self.query.fetch().await?;

        let visibility = SectionVisibility::of(&config);
        debug!(?visibility, "Resolved section visibility");

        let ctx = RenderContext {
            year: Utc::now().year(),
            favicon_href: self.favicon_href(&config),
        };
        if ctx.favicon_href.is_none() {
            debug!("No favicon drawn, page carries no icon links");
        }

        Ok(compose_page(&config, &visibility, &ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::portfolio::application::ports::outgoing::{BrandMark, PortfolioQueryError};
    use crate::tests::support::portfolio_fixtures::{experience, minimal_config};
    use crate::tests::support::stubs::StubPortfolioQuery;

    /* --------------------------------------------------
     * Mock BrandMarkRenderer
     * -------------------------------------------------- */

    mock! {
        pub Renderer {}
        impl BrandMarkRenderer for Renderer {
            fn draw(&self, kind: BrandMarkKind, initials: &str, size: u32) -> Option<BrandMark>;
        }
    }

    fn svg_mark() -> BrandMark {
        BrandMark {
            content_type: "image/svg+xml",
            bytes: b"<svg/>".to_vec(),
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_draws_favicon_from_normalized_initials() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_draw()
            .withf(|kind, initials, size| {
                *kind == BrandMarkKind::Favicon && initials == "JD" && *size == PAGE_FAVICON_SIZE
            })
            .times(1)
            .returning(|_, _, _| Some(svg_mark()));

        let service = GetPageLayoutService::new(
            StubPortfolioQuery::found(minimal_config()),
            Arc::new(renderer),
        );

        let page = service.execute().await.unwrap();

        let expected = format!("data:image/svg+xml;base64,{}", STANDARD.encode(b"<svg/>"));
        assert_eq!(page.meta.icons.len(), 4);
        assert!(page.meta.icons.iter().all(|icon| icon.href == expected));
    }

    #[tokio::test]
    async fn execute_without_favicon_leaves_icons_empty() {
        let mut renderer = MockRenderer::new();
        renderer.expect_draw().returning(|_, _, _| None);

        let service = GetPageLayoutService::new(
            StubPortfolioQuery::found(minimal_config()),
            Arc::new(renderer),
        );

        let page = service.execute().await.unwrap();

        assert!(page.meta.icons.is_empty());
    }

    #[tokio::test]
    async fn execute_stamps_current_year_and_applies_visibility() {
        let mut renderer = MockRenderer::new();
        renderer.expect_draw().returning(|_, _, _| None);

        let mut config = minimal_config();
        config.experience = vec![experience("Acme")];

        let service =
            GetPageLayoutService::new(StubPortfolioQuery::found(config), Arc::new(renderer));

        let page = service.execute().await.unwrap();

        assert!(page
            .footer
            .copyright
            .starts_with(&format!("© {} ", Utc::now().year())));
        assert!(page.experience.is_some());
        assert!(page.projects.featured.is_empty());
    }

    #[tokio::test]
    async fn execute_maps_query_error() {
        let renderer = MockRenderer::new();
        let service = GetPageLayoutService::new(
            StubPortfolioQuery::error(PortfolioQueryError::Unavailable("gone".to_string())),
            Arc::new(renderer),
        );

        let result = service.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            GetPageLayoutError::ConfigError(msg) if msg == "gone"
        ));
    }
}
