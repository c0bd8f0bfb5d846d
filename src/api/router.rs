//! API Router with Swagger UI

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::ErrorResponse;
use crate::api::handlers::{forecasts, health, ForecastAppState};
use crate::application::ForecastService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Forecasts
        forecasts::list_forecasts,
    ),
    components(
        schemas(
            ErrorResponse,
            health::HealthResponse,
            forecasts::WeatherForecastResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health check. Use for availability monitoring (uptime, ping, readiness)."),
        (name = "Forecasts", description = "Read-only weather forecast queries. Records are seeded at migration time; `temperatureF` is always derived from `temperatureC`, never stored."),
    ),
    info(
        title = "Weather Forecast Service API",
        version = "1.0.0",
        description = "Minimal read-only weather forecast API backed by SeaORM.

## Endpoints

- `GET /weatherforecast` — forecasts ordered ascending by date, optionally
  filtered with `?start_date=<ISO 8601 date-time>` (time-of-day is discarded
  before comparison)
- `GET /health` — service status

## Response format

Forecasts are returned as a plain JSON array:
```json
[{\"id\": 1, \"date\": \"2024-07-01\", \"temperatureC\": 20, \"temperatureF\": 67, \"summary\": \"Mild\"}]
```

An absent summary is serialized as `null`, never an empty string.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(service: Arc<ForecastService>) -> Router {
    let forecast_state = ForecastAppState { service };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Forecasts
        .route("/weatherforecast", get(forecasts::list_forecasts))
        .with_state(forecast_state)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, DomainResult, ForecastRepository, WeatherForecast};
    use crate::infrastructure::MemoryForecastRepository;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use tower::ServiceExt;

    /// Store that fails every read, for exercising the error path
    struct FailingForecastRepository;

    #[async_trait]
    impl ForecastRepository for FailingForecastRepository {
        async fn find_from(
            &self,
            _start: Option<NaiveDate>,
        ) -> DomainResult<Vec<WeatherForecast>> {
            Err(DomainError::Storage("connection closed".to_string()))
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn test_router() -> Router {
        let repo = MemoryForecastRepository::new();
        repo.insert(date(2), 25, None);
        repo.insert(date(1), 20, Some("Mild"));
        create_api_router(Arc::new(ForecastService::new(Arc::new(repo))))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_forecasts_returns_sorted_camel_case_array() {
        let (status, body) = get_json(test_router(), "/weatherforecast").await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["date"], "2024-07-01");
        assert_eq!(records[0]["temperatureC"], 20);
        assert_eq!(records[0]["temperatureF"], 67);
        assert_eq!(records[0]["summary"], "Mild");
        assert_eq!(records[1]["date"], "2024-07-02");
        // absent summary serializes as null, not ""
        assert!(records[1]["summary"].is_null());
    }

    #[tokio::test]
    async fn test_list_forecasts_with_start_date_filters() {
        let (status, body) =
            get_json(test_router(), "/weatherforecast?start_date=2024-07-02T10:30:00").await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["date"], "2024-07-02");
    }

    #[tokio::test]
    async fn test_list_forecasts_empty_store_is_ok() {
        let repo = MemoryForecastRepository::new();
        let router = create_api_router(Arc::new(ForecastService::new(Arc::new(repo))));

        let (status, body) = get_json(router, "/weatherforecast").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_error_body() {
        let service = ForecastService::new(Arc::new(FailingForecastRepository));
        let router = create_api_router(Arc::new(service));

        let (status, body) = get_json(router, "/weatherforecast").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("connection closed"), "error body: {}", error);
    }

    #[tokio::test]
    async fn test_malformed_start_date_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/weatherforecast?start_date=not-a-date")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json(test_router(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
