mod auth;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use chrono::Utc;
use matching_engine::{LoadStore, MatchEngine};
use persistence::FileStore;
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_KEY: &str = "demo-api-key-12345";
const DEFAULT_DATA_FILE: &str = "loads.json";
const DEFAULT_SEED_COUNT: usize = 100;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting loadboard gateway service");

    let port = env_parsed("PORT", DEFAULT_PORT)?;
    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    let data_file =
        std::env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let seed = env_parsed("SEED", 0u64)?;
    let seed_count = env_parsed("SEED_COUNT", DEFAULT_SEED_COUNT)?;

    // Open the catalog and seed it on first run
    let store = Arc::new(FileStore::open(&data_file)?);
    let catalog = store.initialize_if_empty(datagen::generate(seed_count, seed, Utc::now()))?;
    tracing::info!(loads = catalog.len(), file = %data_file, "catalog ready");

    let engine = Arc::new(MatchEngine::new(store));
    let state = AppState::new(engine, api_key);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {name}: {e}")),
        Err(_) => Ok(default),
    }
}
