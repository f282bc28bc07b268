// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error codes carried in `ErrorDetail.code` by the portfolio endpoints.
pub mod error_codes {
    /// Query string missing a parameter or holding an unparsable one.
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    /// Negative or non-finite scroll metrics.
    pub const INVALID_VIEWPORT_METRICS: &str = "INVALID_VIEWPORT_METRICS";
    /// `{kind}` is neither `logo` nor `favicon`.
    pub const UNKNOWN_BRAND_MARK: &str = "UNKNOWN_BRAND_MARK";
    /// Requested brand mark size outside the accepted range.
    pub const INVALID_BRAND_MARK_SIZE: &str = "INVALID_BRAND_MARK_SIZE";
    /// The portfolio configuration could not be read.
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Envelope around a rendered payload, such as the page layout or a scroll state.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    /// `PageLayout` for `/api/portfolio/layout`, `ScrollState` for `/api/portfolio/scroll-state`
    pub data: T,
}

/// Envelope returned for every rejected portfolio request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of the values in [`error_codes`]
    #[schema(example = "INVALID_BRAND_MARK_SIZE")]
    pub code: String,

    #[schema(example = "Size 4 is outside 16..=512")]
    pub message: String,
}
