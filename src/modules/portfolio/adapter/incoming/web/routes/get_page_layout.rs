use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    portfolio::application::ports::incoming::use_cases::GetPageLayoutError,
    portfolio::domain::sections::PageLayout,
    shared::api::ApiResponse,
    AppState,
};

/// Get the composed portfolio page
///
/// Returns every visible section of the page, in page order, as typed view
/// models. Sections whose data is empty are omitted from `sections` and
/// their view is `null`.
#[utoipa::path(
    get,
    path = "/api/portfolio/layout",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Composed page layout",
            body = inline(SuccessResponse<PageLayout>)
        ),
        (
            status = 500,
            description = "Configuration unavailable",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        )
    )
)]
#[get("/api/portfolio/layout")]
pub async fn get_page_layout_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_layout.execute().await {
        Ok(layout) => ApiResponse::success(layout),

        Err(GetPageLayoutError::ConfigError(msg)) => {
            error!("Failed to compose page layout: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
