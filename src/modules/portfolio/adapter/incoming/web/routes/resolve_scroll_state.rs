use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::warn;
use utoipa::IntoParams;

use crate::{
    api::schemas::{error_codes, ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::ResolveScrollStateError,
    portfolio::domain::policies::{ScrollState, ViewportMetrics},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScrollStateQuery {
    /// Current vertical scroll offset in pixels
    pub scroll_offset: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
    /// Total document height in pixels
    pub document_height: f64,
}

impl From<ScrollStateQuery> for ViewportMetrics {
    fn from(q: ScrollStateQuery) -> Self {
        ViewportMetrics {
            scroll_offset: q.scroll_offset,
            viewport_height: q.viewport_height,
            document_height: q.document_height,
        }
    }
}

/// Resolve scroll-driven affordances
///
/// Given the current viewport metrics, returns the navigation bar style and
/// the scroll-arrow state with the action it triggers.
#[utoipa::path(
    get,
    path = "/api/portfolio/scroll-state",
    tag = "portfolio",
    params(ScrollStateQuery),
    responses(
        (
            status = 200,
            description = "Scroll state",
            body = inline(SuccessResponse<ScrollState>),
            example = json!({
                "success": true,
                "data": {
                    "nav_bar": "transparent",
                    "arrow": "down",
                    "arrow_action": { "scroll_to_anchor": "about" }
                }
            })
        ),
        (
            status = 400,
            description = "Missing, malformed, negative or non-finite metrics",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_VIEWPORT_METRICS",
                    "message": "Viewport metrics must be finite and non-negative"
                }
            })
        )
    )
)]
#[get("/api/portfolio/scroll-state")]
pub async fn resolve_scroll_state_handler(
    query: web::Query<ScrollStateQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let metrics = ViewportMetrics::from(query.into_inner());

    match data.portfolio.resolve_scroll.execute(metrics).await {
        Ok(state) => ApiResponse::success(state),

        Err(err @ ResolveScrollStateError::InvalidMetrics) => {
            warn!(?metrics, "Rejected viewport metrics");
            ApiResponse::bad_request(error_codes::INVALID_VIEWPORT_METRICS, &err.to_string())
        }
    }
}
