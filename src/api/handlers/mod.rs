//! API Handlers

pub mod forecasts;
pub mod health;

pub use forecasts::ForecastAppState;
pub use health::*;
