//! # Weather Forecast Service
//!
//! Minimal read-only weather forecast API backed by a relational database
//! accessed through SeaORM.
//!
//! ## Architecture
//!
//! - **domain**: The forecast entity, derived Fahrenheit conversion and the
//!   repository trait
//! - **application**: The forecast query service
//! - **infrastructure**: SeaORM store (entities, migrations, repository) plus
//!   an in-memory store for tests
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmForecastRepository};

// Re-export API router
pub use api::create_api_router;
