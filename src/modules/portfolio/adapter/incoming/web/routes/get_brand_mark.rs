use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;

use crate::{
    api::schemas::{error_codes, ErrorResponse},
    portfolio::application::ports::incoming::use_cases::GetBrandMarkError,
    portfolio::application::ports::outgoing::BrandMarkKind,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BrandMarkQuery {
    /// Edge length in pixels (16..=512). Defaults to 40 for the logo and 32
    /// for the favicon.
    pub size: Option<u32>,
}

/// Draw a brand mark
///
/// Returns the initials-based logo or favicon as an SVG document.
#[utoipa::path(
    get,
    path = "/api/portfolio/brand/{kind}",
    tag = "portfolio",
    params(
        ("kind" = String, Path, description = "Mark to draw: `logo` or `favicon`"),
        BrandMarkQuery
    ),
    responses(
        (status = 200, description = "SVG document", content_type = "image/svg+xml", body = String),
        (status = 204, description = "Nothing to draw (empty initials)"),
        (status = 400, description = "Size out of range", body = ErrorResponse),
        (status = 404, description = "Unknown mark", body = ErrorResponse)
    )
)]
#[get("/api/portfolio/brand/{kind}")]
pub async fn get_brand_mark_handler(
    path: web::Path<String>,
    query: web::Query<BrandMarkQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match path.parse::<BrandMarkKind>() {
        Ok(kind) => kind,
        Err(err) => {
            return ApiResponse::not_found(error_codes::UNKNOWN_BRAND_MARK, &err.to_string())
        }
    };

    match data.portfolio.get_brand_mark.execute(kind, query.size).await {
        Ok(Some(mark)) => HttpResponse::Ok()
            .content_type(mark.content_type)
            .body(mark.bytes),

        Ok(None) => ApiResponse::no_content(),

        Err(err @ GetBrandMarkError::InvalidSize(_)) => {
            warn!(%kind, "Rejected brand mark request: {}", err);
            ApiResponse::bad_request(error_codes::INVALID_BRAND_MARK_SIZE, &err.to_string())
        }

        Err(GetBrandMarkError::ConfigError(msg)) => {
            error!(%kind, "Failed to draw brand mark: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
