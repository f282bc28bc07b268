use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::portfolio::application::ports::outgoing::BrandMarkKind;
use crate::portfolio::domain::policies::{
    Anchor, ExternalLink, IconMode, LinkTarget, NavBarStyle, ResumeAction, ResumeLink,
    ScrollAction, ScrollArrow, ScrollState,
};
use crate::portfolio::domain::sections::{PageLayout, SectionKind};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Renderer API",
        version = "1.0.0",
        description = "Render model of a single-page developer portfolio: composed sections, scroll affordances and brand marks",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::portfolio::adapter::incoming::web::routes::get_page_layout_handler,
        crate::portfolio::adapter::incoming::web::routes::resolve_scroll_state_handler,
        crate::portfolio::adapter::incoming::web::routes::get_brand_mark_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PageLayout>,
            SuccessResponse<ScrollState>,
            ErrorResponse,
            ErrorDetail,

            // Page
            PageLayout,
            SectionKind,
            Anchor,
            ExternalLink,
            LinkTarget,
            ResumeLink,
            ResumeAction,
            IconMode,

            // Scroll
            ScrollState,
            NavBarStyle,
            ScrollArrow,
            ScrollAction,

            // Brand
            BrandMarkKind
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio render model endpoints"),
    )
)]
pub struct ApiDoc;
