//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the router to an in-memory store and a manual clock
//! - A store that always fails, for error-path tests
//! - A PostgreSQL-backed context for the ignored database tests
//!
//! # Requirements
//! Database tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Duration, Utc};

use quizdeck_backend::clock::{Clock, ManualClock};
use quizdeck_backend::models::{DueCard, ReviewRecord};
use quizdeck_backend::services::review::ReviewService;
use quizdeck_backend::store::{
    MemoryStore, PgStore, Result as StoreResult, ReviewRecordStore, StoreError,
};
use quizdeck_backend::{router, AppState};

/// Test context holding the store, clock and router.
pub struct TestContext {
    pub store: Arc<dyn ReviewRecordStore>,
    pub clock: Arc<ManualClock>,
    app: Router,
}

impl TestContext {
    /// In-memory store with the clock pinned at [`fixtures::start_time`].
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Context around any store implementation.
    pub fn with_store(store: Arc<dyn ReviewRecordStore>) -> Self {
        let clock = Arc::new(ManualClock::new(fixtures::start_time()));
        let reviews = ReviewService::new(store.clone(), clock.clone());
        let app = router(AppState::new(reviews));

        Self { store, clock, app }
    }

    /// Context backed by PostgreSQL.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn with_postgres() -> (Self, PgStore) {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let store = PgStore::connect(&database_url, 2)
            .await
            .expect("Failed to connect to test database");

        store
            .run_migrations()
            .await
            .expect("Failed to run migrations");

        (Self::with_store(Arc::new(store.clone())), store)
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn advance_days(&self, days: i64) {
        self.clock.advance(Duration::days(days));
    }
}

/// Store whose every call fails, standing in for an unreachable database.
pub struct DownStore;

#[async_trait]
impl ReviewRecordStore for DownStore {
    async fn get(&self, _user_id: &str, _card_id: &str) -> StoreResult<Option<ReviewRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn upsert(
        &self,
        _user_id: &str,
        _card_id: &str,
        _record: &ReviewRecord,
    ) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn query_due(&self, _user_id: &str, _now: DateTime<Utc>) -> StoreResult<Vec<DueCard>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Remove all records written for a user.
pub async fn cleanup_user(store: &PgStore, user_id: &str) {
    let _ = sqlx::query("DELETE FROM review_records WHERE user_id = $1")
        .bind(user_id)
        .execute(store.pool())
        .await;
}
