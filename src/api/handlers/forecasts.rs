//! Weather forecast REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::dto::ErrorResponse;
use crate::application::ForecastService;
use crate::domain::WeatherForecast;

/// Shared state for forecast routes
#[derive(Clone)]
pub struct ForecastAppState {
    pub service: Arc<ForecastService>,
}

/// One weather forecast entry
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecastResponse {
    /// Unique forecast ID
    pub id: i32,
    /// Calendar date of the forecast (ISO 8601)
    pub date: NaiveDate,
    /// Temperature in degrees Celsius
    pub temperature_c: i32,
    /// Temperature in degrees Fahrenheit, derived from Celsius
    pub temperature_f: i32,
    /// Summary text, `null` when absent
    pub summary: Option<String>,
}

impl From<WeatherForecast> for WeatherForecastResponse {
    fn from(f: WeatherForecast) -> Self {
        Self {
            id: f.id,
            date: f.date,
            temperature_c: f.temperature_c,
            temperature_f: f.temperature_f(),
            summary: f.summary,
        }
    }
}

/// Query parameters for the forecast list
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Optional start date-time; only forecasts dated on or after its
    /// calendar-date portion are returned
    pub start_date: Option<NaiveDateTime>,
}

/// List weather forecasts
///
/// Returns all stored forecasts ordered ascending by date. When
/// `start_date` is given, its time-of-day is discarded and only forecasts
/// with `date >= start_date` are included.
#[utoipa::path(
    get,
    path = "/weatherforecast",
    tag = "Forecasts",
    params(
        ("start_date" = Option<String>, Query, description = "ISO 8601 date-time, e.g. 2024-07-01T00:00:00")
    ),
    responses(
        (status = 200, description = "Forecasts ordered ascending by date", body = Vec<WeatherForecastResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_forecasts(
    State(state): State<ForecastAppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<WeatherForecastResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match state.service.get_forecasts(query.start_date).await {
        Ok(forecasts) => {
            let responses: Vec<WeatherForecastResponse> =
                forecasts.into_iter().map(Into::into).collect();
            Ok(Json(responses))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!(
                "Failed to list forecasts: {}",
                e
            ))),
        )),
    }
}
