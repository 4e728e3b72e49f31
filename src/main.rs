use anyhow::Context;
use tracing_subscriber::EnvFilter;

use portfolio_api::{config, database, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio_api=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Portfolio API in {:?} mode", config.environment);

    let store = database::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    store.migrate().await.context("failed to apply migrations")?;

    let state = AppState::new(store, config).context("set JWT_SECRET before starting the server")?;
    let app = router(state, config);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Portfolio API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
