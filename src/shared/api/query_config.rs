// src/shared/api/query_config.rs
use crate::api::schemas::error_codes;
use crate::shared::api::ApiResponse;
use actix_web::web::QueryConfig;

/// Malformed or missing query parameters come back in the standard envelope
/// instead of actix's plain-text 400.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request(error_codes::VALIDATION_ERROR, &message),
        )
        .into()
    })
}
