//! Applies the schema migrations to the configured database.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use video_catalog::{config::AppConfig, infrastructure::database};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "migration failed");
        eprintln!("migration failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.max_connections())
        .await
        .context("failed to connect to the database")?;

    database::run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;
    tracing::info!("migrations applied");

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
