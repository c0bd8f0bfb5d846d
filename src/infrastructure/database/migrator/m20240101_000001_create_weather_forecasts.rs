//! Create weather_forecasts table

use chrono::{Duration, Utc};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeatherForecasts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeatherForecasts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WeatherForecasts::Date)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeatherForecasts::TemperatureC)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WeatherForecasts::Summary).string_len(50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_weather_forecasts_date")
                    .table(WeatherForecasts::Table)
                    .col(WeatherForecasts::Date)
                    .to_owned(),
            )
            .await?;

        // Seed sample forecasts for the next five days
        let today = Utc::now().date_naive();
        let seed = [
            (1, 20, "Mild"),
            (2, 25, "Warm"),
            (3, 15, "Cool"),
            (4, 10, "Chilly"),
            (5, 30, "Hot"),
        ];

        let mut insert = Query::insert()
            .into_table(WeatherForecasts::Table)
            .columns([
                WeatherForecasts::Date,
                WeatherForecasts::TemperatureC,
                WeatherForecasts::Summary,
            ])
            .to_owned();

        for (offset, temperature_c, summary) in seed {
            insert.values_panic([
                (today + Duration::days(offset)).to_string().into(),
                temperature_c.into(),
                summary.into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeatherForecasts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum WeatherForecasts {
    Table,
    Id,
    Date,
    TemperatureC,
    Summary,
}
