//! In-memory forecast store for development and testing

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DomainResult, ForecastRepository, WeatherForecast};

/// In-memory implementation of the forecast store.
///
/// Satisfies the same contract as the SeaORM repository: date filter,
/// ascending sort, full materialization.
pub struct MemoryForecastRepository {
    forecasts: RwLock<Vec<WeatherForecast>>,
    id_counter: AtomicI32,
}

impl MemoryForecastRepository {
    pub fn new() -> Self {
        Self {
            forecasts: RwLock::new(Vec::new()),
            id_counter: AtomicI32::new(1),
        }
    }

    /// Insert a forecast, assigning the next ID. Returns the assigned ID.
    pub fn insert(&self, date: NaiveDate, temperature_c: i32, summary: Option<&str>) -> i32 {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let mut forecasts = self.forecasts.write().unwrap_or_else(|e| e.into_inner());
        forecasts.push(WeatherForecast {
            id,
            date,
            temperature_c,
            summary: summary.map(str::to_string),
        });
        id
    }
}

impl Default for MemoryForecastRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ForecastRepository for MemoryForecastRepository {
    async fn find_from(&self, start: Option<NaiveDate>) -> DomainResult<Vec<WeatherForecast>> {
        let forecasts = self.forecasts.read().unwrap_or_else(|e| e.into_inner());
        let mut result: Vec<WeatherForecast> = forecasts
            .iter()
            .filter(|f| start.map_or(true, |s| f.date >= s))
            .cloned()
            .collect();
        result.sort_by_key(|f| f.date);
        Ok(result)
    }
}
