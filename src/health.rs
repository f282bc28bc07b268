use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    portfolio: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks that the portfolio configuration can be served
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.query.fetch().await {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            portfolio: "ok",
        }),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                portfolio: "unhealthy",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::portfolio::application::ports::outgoing::PortfolioQueryError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_fixtures::minimal_config;
    use crate::tests::support::stubs::StubPortfolioQuery;

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_readiness_ok_when_config_available() {
        let app_state = TestAppStateBuilder::default()
            .with_query(StubPortfolioQuery::found(minimal_config()))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["portfolio"], "ok");
    }

    #[actix_web::test]
    async fn test_readiness_unavailable_when_config_fails() {
        let app_state = TestAppStateBuilder::default()
            .with_query(StubPortfolioQuery::error(PortfolioQueryError::Unavailable(
                "missing".to_string(),
            )))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(readiness)).await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
    }
}
