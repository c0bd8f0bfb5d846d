pub mod database;
pub mod memory;

pub use database::{init_database, DatabaseConfig, SeaOrmForecastRepository};
pub use memory::MemoryForecastRepository;
