//! PostgreSQL record store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use review_core::{DueCard, ReviewRecord};
use sqlx::{postgres::PgPoolOptions, PgPool};

use super::{Result, ReviewRecordStore, StoreError};
use crate::models::DbReviewRecord;

/// Record store backed by a connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ReviewRecordStore for PgStore {
    async fn get(&self, user_id: &str, card_id: &str) -> Result<Option<ReviewRecord>> {
        let row = sqlx::query_as::<_, DbReviewRecord>(
            r#"
            SELECT card_id, interval_days, repetitions, ease_factor, due_date, last_reviewed_at
            FROM review_records
            WHERE user_id = $1 AND card_id = $2
            "#,
        )
        .bind(user_id)
        .bind(card_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.to_record()).transpose()
    }

    async fn upsert(&self, user_id: &str, card_id: &str, record: &ReviewRecord) -> Result<()> {
        let row = DbReviewRecord::from_record(card_id, record)?;

        sqlx::query(
            r#"
            INSERT INTO review_records (user_id, card_id, interval_days, repetitions,
                                        ease_factor, due_date, last_reviewed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, card_id) DO UPDATE SET
                interval_days = EXCLUDED.interval_days,
                repetitions = EXCLUDED.repetitions,
                ease_factor = EXCLUDED.ease_factor,
                due_date = EXCLUDED.due_date,
                last_reviewed_at = EXCLUDED.last_reviewed_at,
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(&row.card_id)
        .bind(row.interval_days)
        .bind(row.repetitions)
        .bind(row.ease_factor)
        .bind(row.due_date)
        .bind(row.last_reviewed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn query_due(&self, user_id: &str, now: DateTime<Utc>) -> Result<Vec<DueCard>> {
        let rows = sqlx::query_as::<_, DbReviewRecord>(
            r#"
            SELECT card_id, interval_days, repetitions, ease_factor, due_date, last_reviewed_at
            FROM review_records
            WHERE user_id = $1 AND due_date <= $2
            ORDER BY due_date, card_id
            "#,
        )
        .bind(user_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(|r| r.to_due_card()).collect()
    }
}
