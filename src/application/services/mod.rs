//! Application services

mod forecast;

pub use forecast::ForecastService;
