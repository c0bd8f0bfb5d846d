//! Weather forecast entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Weather forecast row. Fahrenheit is intentionally not a column:
/// it is derived from Celsius at read time by the domain model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weather_forecasts")]
pub struct Model {
    /// Unique forecast ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Calendar date of the forecast
    pub date: Date,

    /// Temperature in degrees Celsius
    pub temperature_c: i32,

    /// Optional summary text (max 50 chars)
    pub summary: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
