use axum::{Extension, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use ops_dashboard::shared::core::week::today;
use ops_dashboard::shared::infrastructure::storage::StorageBackend;
use ops_dashboard::shared::infrastructure::storage::in_memory::InMemoryStorage;
use ops_dashboard::shared::infrastructure::storage::remote::RemoteStorage;
use ops_dashboard::shell::config::{AppConfig, StorageSelection};
use ops_dashboard::shell::graphql::{GRAPHQL_PATH, graphiql, graphql, schema};
use ops_dashboard::shell::http::router;
use ops_dashboard::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let storage: Arc<dyn StorageBackend> = match &config.storage {
        StorageSelection::Fixture => {
            tracing::info!("using seeded in-memory storage");
            Arc::new(InMemoryStorage::seeded(today()))
        }
        StorageSelection::Remote { base_url } => {
            tracing::info!(%base_url, "using remote storage");
            Arc::new(RemoteStorage::new(base_url))
        }
    };

    let state = AppState::new(storage, config.reports.clone());
    let schema = schema(state.clone());

    let app = router(state)
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}{}", config.addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
