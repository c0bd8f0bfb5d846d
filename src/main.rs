//!
//! Weather forecast HTTP service.
//! Reads configuration from TOML file (~/.config/forecast-service/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use forecast_service::application::ForecastService;
use forecast_service::domain::ForecastRepository;
use forecast_service::infrastructure::database::migrator::Migrator;
use forecast_service::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
    SeaOrmForecastRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("FORECAST_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Weather Forecast Service...");

    // ── Database ───────────────────────────────────────────────
    // DATABASE_URL takes precedence over the config file
    let db_config = DatabaseConfig {
        url: std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| app_cfg.database.connection_url()),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Services & router ──────────────────────────────────────
    let repository: Arc<dyn ForecastRepository> =
        Arc::new(SeaOrmForecastRepository::new(db.clone()));
    let service = Arc::new(ForecastService::new(repository));
    let router = create_api_router(service);

    // ── Serve with graceful shutdown ───────────────────────────
    let addr = app_cfg.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        error!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Weather Forecast Service shutdown complete");
    Ok(())
}
