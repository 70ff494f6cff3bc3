pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::clock::SystemClock;
use crate::config::Config;
use crate::services::review::ReviewService;
use crate::store::{MemoryStore, PgStore, ReviewRecordStore, StoreError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewService>,
}

impl AppState {
    pub fn new(reviews: ReviewService) -> Self {
        Self {
            reviews: Arc::new(reviews),
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = open_store(&config).await?;
    let state = AppState::new(ReviewService::new(store, Arc::new(SystemClock)));

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/reviews", post(routes::reviews::submit))
        .route("/api/users/:user_id/due", get(routes::reviews::due))
        .route(
            "/api/users/:user_id/cards/:card_id",
            get(routes::reviews::get_record),
        )
        .with_state(state)
}

/// PostgreSQL when a database URL is configured, otherwise in-memory.
pub async fn open_store(config: &Config) -> Result<Arc<dyn ReviewRecordStore>, StoreError> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let store = PgStore::connect(url, config.max_connections).await?;

            tracing::info!("Running migrations...");
            store.run_migrations().await?;

            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, review records are kept in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}
