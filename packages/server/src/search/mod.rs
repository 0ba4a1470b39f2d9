//! Bill full-text search.
//!
//! The index is a separate table rebuilt from synced bills as the final
//! pipeline stage, so a half-finished sync never leaks into search
//! results. Identifier matches outrank title matches outrank abstract
//! matches.

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

/// Drop and repopulate the search index from synced bills. Returns the
/// number of bills indexed.
pub async fn rebuild_index(pool: &PgPool) -> Result<u64> {
    sqlx::query("DELETE FROM bill_search_index")
        .execute(pool)
        .await?;

    let indexed = sqlx::query(
        "INSERT INTO bill_search_index (bill_id, document)
         SELECT
             b.id,
             setweight(to_tsvector('english', b.identifier), 'A') ||
             setweight(to_tsvector('english', b.title), 'B') ||
             setweight(to_tsvector('english', coalesce(b.abstract, '')), 'C')
         FROM bills b
         JOIN councilmatic_bills cb ON cb.bill_id = b.id",
    )
    .execute(pool)
    .await?
    .rows_affected();

    info!("Search index rebuilt: {} bills", indexed);
    Ok(indexed)
}

#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct BillSearchResult {
    pub slug: String,
    pub identifier: String,
    pub title: String,
    pub rank: f32,
}

/// Query the bill index with websearch syntax ("land use", quoted
/// phrases, -exclusions), best matches first.
pub async fn search_bills(query: &str, pool: &PgPool) -> Result<Vec<BillSearchResult>> {
    sqlx::query_as::<_, BillSearchResult>(
        "SELECT
             cb.slug,
             b.identifier,
             b.title,
             ts_rank(s.document, websearch_to_tsquery('english', $1)) AS rank
         FROM bill_search_index s
         JOIN bills b ON b.id = s.bill_id
         JOIN councilmatic_bills cb ON cb.bill_id = s.bill_id
         WHERE s.document @@ websearch_to_tsquery('english', $1)
         ORDER BY rank DESC, b.identifier
         LIMIT 50",
    )
    .bind(query)
    .fetch_all(pool)
    .await
    .map_err(Into::into)
}
