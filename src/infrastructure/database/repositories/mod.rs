//! SeaORM repository implementations

mod forecast_repository;

pub use forecast_repository::SeaOrmForecastRepository;
