use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Canonical person - SQL persistence layer.
///
/// Owned by the scrape/import pipeline. List-valued attributes
/// (sources, links, contact details) are stored as JSONB in the shape
/// the scrapers emit.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub sources: serde_json::Value,
    pub links: serde_json::Value,
    pub contact_details: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    fn new_id() -> String {
        format!("ocd-person/{}", Uuid::new_v4())
    }

    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM people WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM people WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM people ORDER BY name")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM people")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a scraped person, or refresh the scraped attributes if a
    /// person with this name exists. The canonical id is minted on
    /// first sight and never changes, so re-scrapes are idempotent.
    pub async fn upsert_scraped(
        name: &str,
        sources: serde_json::Value,
        links: serde_json::Value,
        contact_details: serde_json::Value,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO people (id, name, sources, links, contact_details)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (name) DO UPDATE
               SET sources = EXCLUDED.sources,
                   links = EXCLUDED.links,
                   contact_details = EXCLUDED.contact_details,
                   updated_at = now()
             RETURNING *",
        )
        .bind(Self::new_id())
        .bind(name)
        .bind(sources)
        .bind(links)
        .bind(contact_details)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Canonical membership linking a person to an organization seat.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Membership {
    pub id: String,
    pub person_id: String,
    pub organization_id: String,
    pub post_id: Option<String>,
    pub role: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    fn new_id() -> String {
        format!("ocd-membership/{}", Uuid::new_v4())
    }

    pub async fn find_for_person(person_id: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM memberships WHERE person_id = $1 ORDER BY label",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// One membership per council seat: conflicts on
    /// (person, organization, label) refresh the role and post instead
    /// of inserting a duplicate.
    pub async fn upsert(
        person_id: &str,
        organization_id: &str,
        post_id: Option<&str>,
        role: &str,
        label: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO memberships (id, person_id, organization_id, post_id, role, label)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (person_id, organization_id, label) DO UPDATE
               SET role = EXCLUDED.role,
                   post_id = EXCLUDED.post_id
             RETURNING *",
        )
        .bind(Self::new_id())
        .bind(person_id)
        .bind(organization_id)
        .bind(post_id)
        .bind(role)
        .bind(label)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Presentation extension of a canonical person.
///
/// Created by the sync step on first sight of a new canonical record;
/// slug, headshot, and biography have no canonical source and are
/// curated here. Sync never deletes or overwrites these rows.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct CouncilmaticPerson {
    pub person_id: String,
    pub slug: String,
    pub headshot: String,
    pub biography: Option<String>,
}

impl CouncilmaticPerson {
    pub async fn find_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM councilmatic_people WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_for_person(person_id: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM councilmatic_people WHERE person_id = $1")
            .bind(person_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM councilmatic_people")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Curation path for the presentation-only fields.
    pub async fn update_profile(
        slug: &str,
        headshot: &str,
        biography: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "UPDATE councilmatic_people
             SET headshot = $2, biography = $3
             WHERE slug = $1
             RETURNING *",
        )
        .bind(slug)
        .bind(headshot)
        .bind(biography)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
