//! Database entities module

pub mod weather_forecast;

pub use weather_forecast::Entity as WeatherForecast;
