//! Job openings server: loads config, opens the SQLite store, and serves the API.
//!
//! Run from repo root: `cargo run -p openings-server`

use openings_api::{app, AppConfig, AppState, ListPolicy, OpeningService, SqliteOpeningStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("openings_api=info,openings_server=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env()?;
    let store = SqliteOpeningStore::open(&config.database_path).await?;
    if config.list_policy == ListPolicy::EmptyIsNotFound {
        tracing::info!("empty opening list is reported as 404");
    }
    let state = AppState {
        service: OpeningService::new(Arc::new(store), config.list_policy),
    };

    let router = app(state, config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
