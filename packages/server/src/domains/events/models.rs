use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Canonical meeting scraped from Legistar.
///
/// Start times are wall-clock values local to the timezone column, the
/// way the source publishes them.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub start_time: NaiveDateTime,
    pub timezone: String,
    pub location: String,
    pub status: String,
    pub legistar_id: String,
    pub agenda: serde_json::Value,
    pub sources: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    fn new_id() -> String {
        format!("ocd-event/{}", Uuid::new_v4())
    }

    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Most recent meetings first.
    pub async fn find_recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM events ORDER BY start_time DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a scraped event, or refresh the scraped attributes if the
    /// Legistar identifier is already known.
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert_scraped(
        name: &str,
        start_time: NaiveDateTime,
        timezone: &str,
        location: &str,
        status: &str,
        legistar_id: &str,
        agenda: serde_json::Value,
        sources: serde_json::Value,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO events
                 (id, name, start_time, timezone, location, status, legistar_id, agenda, sources)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (legistar_id) DO UPDATE
               SET name = EXCLUDED.name,
                   start_time = EXCLUDED.start_time,
                   timezone = EXCLUDED.timezone,
                   location = EXCLUDED.location,
                   status = EXCLUDED.status,
                   agenda = EXCLUDED.agenda,
                   sources = EXCLUDED.sources,
                   updated_at = now()
             RETURNING *",
        )
        .bind(Self::new_id())
        .bind(name)
        .bind(start_time)
        .bind(timezone)
        .bind(location)
        .bind(status)
        .bind(legistar_id)
        .bind(agenda)
        .bind(sources)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Presentation extension of a canonical event; the slug embeds the
/// start time to keep recurring meeting names unique.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CouncilmaticEvent {
    pub event_id: String,
    pub slug: String,
}

impl CouncilmaticEvent {
    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM councilmatic_events WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_for_event(event_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM councilmatic_events WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM councilmatic_events")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
