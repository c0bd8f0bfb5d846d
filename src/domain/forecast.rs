//! Weather forecast aggregate
//!
//! Contains the WeatherForecast entity, the Celsius-to-Fahrenheit conversion,
//! and the repository interface the service reads through.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;

/// One forecast entry: a calendar date, a Celsius temperature and an
/// optional summary. Fahrenheit is derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// Unique forecast ID, assigned by the store
    pub id: i32,

    /// Calendar date of the forecast (no time-of-day)
    pub date: NaiveDate,

    /// Temperature in degrees Celsius
    pub temperature_c: i32,

    /// Optional summary text (max 50 chars in storage)
    pub summary: Option<String>,
}

impl WeatherForecast {
    /// Temperature in degrees Fahrenheit, computed from Celsius.
    ///
    /// Uses the truncating integer-cast form `32 + (c / 0.5556)` kept for
    /// wire compatibility: 0°C -> 32, 100°C -> 211, -40°C -> -39.
    pub fn temperature_f(&self) -> i32 {
        32 + (self.temperature_c as f64 / 0.5556) as i32
    }
}

/// Repository interface for forecast reads.
///
/// The only capability the service needs from persistence: retrieve all
/// records at or after an optional start date, sorted ascending by date,
/// fully materialized.
#[async_trait]
pub trait ForecastRepository: Send + Sync {
    /// All forecasts with `date >= start` (all forecasts when `start` is
    /// `None`), ordered ascending by date. An empty store yields `Ok(vec![])`.
    async fn find_from(&self, start: Option<NaiveDate>) -> DomainResult<Vec<WeatherForecast>>;
}
