// src/services/history.rs
use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::PresentationHistoryEntry;

/// Append-only record of generated presentations.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Records a generation; the timestamp is assigned by the store's clock.
    async fn create(&self, title: &str, download_link: &str)
        -> Result<PresentationHistoryEntry, AppError>;

    /// Entries newest first. With a filter, only titles containing it
    /// (case-insensitive, literal substring).
    async fn list(&self, filter: Option<&str>) -> Result<Vec<PresentationHistoryEntry>, AppError>;

    /// Connectivity check for the status endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed history.
#[derive(Debug, Clone)]
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn create(
        &self,
        title: &str,
        download_link: &str,
    ) -> Result<PresentationHistoryEntry, AppError> {
        let entry = sqlx::query_as::<_, PresentationHistoryEntry>(
            r#"
            INSERT INTO presentation_history (title, download_link)
            VALUES ($1, $2)
            RETURNING id, title, created_at, download_link
            "#,
        )
        .bind(title)
        .bind(download_link)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = entry.id, title = %entry.title, "history entry created");
        Ok(entry)
    }

    async fn list(&self, filter: Option<&str>) -> Result<Vec<PresentationHistoryEntry>, AppError> {
        let entries = match filter {
            // strpos keeps the match literal, unlike ILIKE where % and _ are wildcards
            Some(query) => {
                sqlx::query_as::<_, PresentationHistoryEntry>(
                    r#"
                    SELECT id, title, created_at, download_link
                    FROM presentation_history
                    WHERE strpos(lower(title), lower($1)) > 0
                    ORDER BY created_at DESC, id DESC
                    "#,
                )
                .bind(query)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, PresentationHistoryEntry>(
                    r#"
                    SELECT id, title, created_at, download_link
                    FROM presentation_history
                    ORDER BY created_at DESC, id DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(entries)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
