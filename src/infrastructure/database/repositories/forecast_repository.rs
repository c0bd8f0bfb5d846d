//! SeaORM implementation of ForecastRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{DomainError, DomainResult, ForecastRepository, WeatherForecast};
use crate::infrastructure::database::entities::weather_forecast;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn entity_to_domain(f: weather_forecast::Model) -> WeatherForecast {
    WeatherForecast {
        id: f.id,
        date: f.date,
        temperature_c: f.temperature_c,
        summary: f.summary,
    }
}

// ── SeaOrmForecastRepository ────────────────────────────────────

pub struct SeaOrmForecastRepository {
    db: DatabaseConnection,
}

impl SeaOrmForecastRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ForecastRepository for SeaOrmForecastRepository {
    async fn find_from(&self, start: Option<NaiveDate>) -> DomainResult<Vec<WeatherForecast>> {
        let mut query = weather_forecast::Entity::find();

        if let Some(start) = start {
            query = query.filter(weather_forecast::Column::Date.gte(start));
        }

        let models = query
            .order_by_asc(weather_forecast::Column::Date)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
