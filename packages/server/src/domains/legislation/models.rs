use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Canonical bill.
///
/// No bill scraper exists yet, so rows arrive via legacy loads; sync
/// and search cover them the same way as scraped models so the
/// legislation pages work once data is present.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Bill {
    pub id: String,
    /// City identifier, e.g. "CB 120863".
    pub identifier: String,
    pub title: String,
    pub classification: String,
    #[sqlx(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub sources: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    fn new_id() -> String {
        format!("ocd-bill/{}", Uuid::new_v4())
    }

    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM bills WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_identifier(identifier: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM bills WHERE identifier = $1")
            .bind(identifier)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn upsert(
        identifier: &str,
        title: &str,
        classification: &str,
        abstract_text: Option<&str>,
        sources: serde_json::Value,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO bills (id, identifier, title, classification, abstract, sources)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (identifier) DO UPDATE
               SET title = EXCLUDED.title,
                   classification = EXCLUDED.classification,
                   abstract = EXCLUDED.abstract,
                   sources = EXCLUDED.sources,
                   updated_at = now()
             RETURNING *",
        )
        .bind(Self::new_id())
        .bind(identifier)
        .bind(title)
        .bind(classification)
        .bind(abstract_text)
        .bind(sources)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Presentation extension of a canonical bill.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CouncilmaticBill {
    pub bill_id: String,
    pub slug: String,
}

impl CouncilmaticBill {
    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM councilmatic_bills WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM councilmatic_bills")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
