pub mod error;
pub mod forecast;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use forecast::{ForecastRepository, WeatherForecast};
