use std::sync::Arc;

use crate::api::plans::AppState;
use crate::config::Config;
use crate::datasets::catalog::Catalogs;

mod api;
mod config;
mod datasets;
mod error;
mod services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let catalogs = Catalogs::load(&config.exercise_dataset_path, &config.nutrition_dataset_path)?;

    if let Some(seed) = config.plan_seed {
        tracing::warn!(seed, "plan.seed_pinned");
    }

    let state = AppState {
        config: config.clone(),
        catalogs: Arc::new(catalogs),
    };

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = %config.port, "server.listening");
    axum::serve(listener, app).await?;
    Ok(())
}
