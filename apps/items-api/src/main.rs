use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_items::seed::seed_sample_items;
use domain_items::{DataGateway, InMemoryDataGateway, ItemUseCases, PgDataGateway};
use migration::Migrator;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod app;
mod config;
mod openapi;
mod state;

use config::{Config, StoreConfig};
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let (gateway, db) = match &config.store {
        StoreConfig::Postgres { postgres, retry } => {
            info!(max_retries = retry.max_retries, "Connecting to PostgreSQL");
            let db = connect_from_config_with_retry(postgres.clone(), retry.clone()).await?;
            run_migrations::<Migrator>(&db, config.app.name).await?;
            let gateway = Arc::new(PgDataGateway::new(db.clone())) as Arc<dyn DataGateway>;
            (gateway, Some(db))
        }
        StoreConfig::Memory => {
            info!("Using in-memory item store; data is lost on exit");
            let gateway = Arc::new(InMemoryDataGateway::new()) as Arc<dyn DataGateway>;
            (gateway, None)
        }
    };

    let use_cases = ItemUseCases::new(gateway);

    if config.seed_sample_data {
        seed_sample_items(&use_cases).await?;
    }

    let state = AppState {
        config,
        db,
        use_cases,
    };

    let app = app::build(&state);

    info!(
        store = %state.config.store.backend(),
        "Starting Items API with graceful shutdown (30s timeout)"
    );

    let cleanup_db = state.db.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(db) = cleanup_db {
                info!("Shutting down: closing PostgreSQL connections");
                match db.close().await {
                    Ok(()) => info!("PostgreSQL connection closed successfully"),
                    Err(e) => tracing::warn!("Failed to close PostgreSQL pool: {}", e),
                }
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
