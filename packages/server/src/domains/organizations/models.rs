use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Canonical organization - the council body itself.
///
/// Created from the jurisdiction definition before any scraped records
/// reference it; memberships resolve organizations by name.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub classification: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    fn new_id() -> String {
        format!("ocd-organization/{}", Uuid::new_v4())
    }

    pub async fn find_by_id(id: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM organizations WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert the organization, or refresh its classification if a row
    /// with this name already exists. The canonical id is minted once.
    pub async fn upsert(name: &str, classification: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO organizations (id, name, classification)
             VALUES ($1, $2, $3)
             ON CONFLICT (name) DO UPDATE
               SET classification = EXCLUDED.classification,
                   updated_at = now()
             RETURNING *",
        )
        .bind(Self::new_id())
        .bind(name)
        .bind(classification)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// A seat on an organization, e.g. "District 3" or "Position 8".
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Post {
    pub id: String,
    pub organization_id: String,
    pub label: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    fn new_id() -> String {
        format!("ocd-post/{}", Uuid::new_v4())
    }

    pub async fn find_by_label(
        organization_id: &str,
        label: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM posts WHERE organization_id = $1 AND label = $2",
        )
        .bind(organization_id)
        .bind(label)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn upsert(
        organization_id: &str,
        label: &str,
        role: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO posts (id, organization_id, label, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (organization_id, label) DO UPDATE
               SET role = EXCLUDED.role
             RETURNING *",
        )
        .bind(Self::new_id())
        .bind(organization_id)
        .bind(label)
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_for_organization(organization_id: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM posts WHERE organization_id = $1 ORDER BY label",
        )
        .bind(organization_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
