//! Canonical-to-presentation sync.
//!
//! For every canonical record not yet mirrored, inserts a presentation
//! row with default presentation-only fields; already-mirrored records
//! are left untouched. Insert-only on purpose: canonical data can be
//! re-scraped freely without destroying locally curated slugs,
//! headshots, or biographies. Raw SQL keeps each model a single
//! set-based statement.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

/// Outcome of syncing one model family.
#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    pub model: &'static str,
    /// Presentation rows created by this run.
    pub created: u64,
    /// Presentation rows now present in total.
    pub total: i64,
}

/// Mirror canonical people into presentation rows. Slugs are minted
/// from the name on first sight and never regenerated.
pub async fn sync_people(pool: &PgPool) -> Result<SyncReport> {
    let created = sqlx::query(
        "INSERT INTO councilmatic_people (person_id, slug, headshot, biography)
         SELECT
             id AS person_id,
             lower(regexp_replace(name, '[^a-zA-Z0-9]+', '-', 'g')) AS slug,
             '' AS headshot,
             NULL AS biography
         FROM people
         WHERE id NOT IN (SELECT person_id FROM councilmatic_people)
         ON CONFLICT (person_id) DO NOTHING",
    )
    .execute(pool)
    .await?
    .rows_affected();

    let total = sqlx::query_scalar("SELECT COUNT(*) FROM councilmatic_people")
        .fetch_one(pool)
        .await?;

    Ok(SyncReport {
        model: "people",
        created,
        total,
    })
}

/// Mirror canonical events. The start date is appended to the slug so
/// recurring meeting names stay unique.
pub async fn sync_events(pool: &PgPool) -> Result<SyncReport> {
    let created = sqlx::query(
        "INSERT INTO councilmatic_events (event_id, slug)
         SELECT
             id AS event_id,
             lower(regexp_replace(name, '[^a-zA-Z0-9]+', '-', 'g'))
                 || '-' || to_char(start_time, 'YYYY-MM-DD-HH24-MI-SS') AS slug
         FROM events
         WHERE id NOT IN (SELECT event_id FROM councilmatic_events)
         ON CONFLICT (event_id) DO NOTHING",
    )
    .execute(pool)
    .await?
    .rows_affected();

    let total = sqlx::query_scalar("SELECT COUNT(*) FROM councilmatic_events")
        .fetch_one(pool)
        .await?;

    Ok(SyncReport {
        model: "events",
        created,
        total,
    })
}

/// Mirror canonical bills, slugging by city identifier.
pub async fn sync_bills(pool: &PgPool) -> Result<SyncReport> {
    let created = sqlx::query(
        "INSERT INTO councilmatic_bills (bill_id, slug)
         SELECT
             id AS bill_id,
             lower(regexp_replace(identifier, '[^a-zA-Z0-9]+', '-', 'g')) AS slug
         FROM bills
         WHERE id NOT IN (SELECT bill_id FROM councilmatic_bills)
         ON CONFLICT (bill_id) DO NOTHING",
    )
    .execute(pool)
    .await?
    .rows_affected();

    let total = sqlx::query_scalar("SELECT COUNT(*) FROM councilmatic_bills")
        .fetch_one(pool)
        .await?;

    Ok(SyncReport {
        model: "bills",
        created,
        total,
    })
}

/// Sync every model family, logging a per-model report.
pub async fn sync_all(pool: &PgPool) -> Result<Vec<SyncReport>> {
    let reports = vec![
        sync_people(pool).await?,
        sync_events(pool).await?,
        sync_bills(pool).await?,
    ];

    for report in &reports {
        info!(
            "Synced {}: {} created, {} total",
            report.model, report.created, report.total
        );
    }

    Ok(reports)
}
