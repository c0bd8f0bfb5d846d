//! Forecast query service

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{DomainResult, ForecastRepository, WeatherForecast};

/// Stateless read service over the forecast store.
///
/// Each call is a single-shot read: no retries, no caching, store failures
/// propagate unchanged to the caller.
pub struct ForecastService {
    repository: Arc<dyn ForecastRepository>,
}

impl ForecastService {
    pub fn new(repository: Arc<dyn ForecastRepository>) -> Self {
        Self { repository }
    }

    /// Retrieve forecasts, optionally filtered to `date >= start_date`.
    ///
    /// Any time-of-day in `start_date` is discarded before the comparison;
    /// filtering and ascending sort by date are delegated to the store.
    pub async fn get_forecasts(
        &self,
        start_date: Option<NaiveDateTime>,
    ) -> DomainResult<Vec<WeatherForecast>> {
        let start = start_date.map(|dt| dt.date());
        debug!("Fetching forecasts from {:?}", start);
        self.repository.find_from(start).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryForecastRepository;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn seeded_repository() -> Arc<MemoryForecastRepository> {
        let repo = MemoryForecastRepository::new();
        // Inserted out of date order on purpose
        repo.insert(date(3), 15, Some("Cool"));
        repo.insert(date(1), 20, Some("Mild"));
        repo.insert(date(2), 25, None);
        Arc::new(repo)
    }

    #[tokio::test]
    async fn test_without_start_date_returns_all_sorted() {
        let service = ForecastService::new(seeded_repository());

        let result = service.get_forecasts(None).await.unwrap();

        assert_eq!(result.len(), 3);
        for pair in result.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_start_date_filters_earlier_records() {
        let service = ForecastService::new(seeded_repository());
        let start = date(2).and_hms_opt(0, 0, 0).unwrap();

        let result = service.get_forecasts(Some(start)).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.date >= date(2)));
    }

    #[tokio::test]
    async fn test_time_of_day_is_discarded() {
        let service = ForecastService::new(seeded_repository());
        // 23:59 on day 2 must still include day 2 itself
        let start = date(2).and_hms_opt(23, 59, 59).unwrap();

        let result = service.get_forecasts(Some(start)).await.unwrap();

        assert!(result.iter().any(|f| f.date == date(2)));
        assert!(result.iter().all(|f| f.date >= date(2)));
    }

    #[tokio::test]
    async fn test_empty_store_returns_empty_vec() {
        let service = ForecastService::new(Arc::new(MemoryForecastRepository::new()));

        let result = service.get_forecasts(None).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_absent_summary_is_preserved() {
        let service = ForecastService::new(seeded_repository());

        let result = service.get_forecasts(None).await.unwrap();

        let day2 = result.iter().find(|f| f.date == date(2)).unwrap();
        assert_eq!(day2.summary, None);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_idempotent() {
        let service = ForecastService::new(seeded_repository());

        let first = service.get_forecasts(None).await.unwrap();
        let second = service.get_forecasts(None).await.unwrap();

        assert_eq!(first, second);
    }
}
