use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Run-tracking metadata for one scraper invocation.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ImportRun {
    pub id: Uuid,
    pub jurisdiction: String,
    pub scraper: String,
    pub status: String,
    pub records_scraped: i32,
    pub records_imported: i32,
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ImportRun {
    pub async fn start(jurisdiction: &str, scraper: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO import_runs (jurisdiction, scraper)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(jurisdiction)
        .bind(scraper)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn succeed(self, scraped: i32, imported: i32, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE import_runs
             SET status = 'succeeded',
                 records_scraped = $2,
                 records_imported = $3,
                 completed_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(self.id)
        .bind(scraped)
        .bind(imported)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn fail(self, error: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE import_runs
             SET status = 'failed',
                 error = $2,
                 completed_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(self.id)
        .bind(error)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM import_runs ORDER BY started_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
