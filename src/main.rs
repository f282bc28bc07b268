pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::portfolio::adapter::outgoing::{
    load_portfolio, StaticPortfolioQuery, SvgBrandMarkRenderer,
};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::BrandMarkRenderer;
use crate::portfolio::application::service::{
    GetBrandMarkService, GetPageLayoutService, ResolveScrollStateService,
};
use crate::shared::api::custom_query_config;
use crate::shared::config::{load_dotenv, ServerConfig};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // .env.{environment} first, then .env, so RUST_LOG can come from either
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    info!(env = %config.env, "Environment selected");

    // Portfolio configuration: read once, shared read-only afterwards
    let portfolio = load_portfolio(&config.portfolio_config_path)
        .await
        .with_context(|| {
            format!(
                "failed to load portfolio configuration from {}",
                config.portfolio_config_path.display()
            )
        })?;
    let portfolio = Arc::new(portfolio);

    let query = StaticPortfolioQuery::new(Arc::clone(&portfolio));
    let renderer: Arc<dyn BrandMarkRenderer> = Arc::new(SvgBrandMarkRenderer::new());

    let state = AppState {
        portfolio: PortfolioUseCases {
            get_layout: Arc::new(GetPageLayoutService::new(
                query.clone(),
                Arc::clone(&renderer),
            )),
            resolve_scroll: Arc::new(ResolveScrollStateService::new()),
            get_brand_mark: Arc::new(GetBrandMarkService::new(query.clone(), renderer)),
            query: Arc::new(query),
        },
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_page_layout_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::resolve_scroll_state_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_brand_mark_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
