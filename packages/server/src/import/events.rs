use anyhow::{anyhow, Result};
use sqlx::PgPool;
use tracing::debug;

use seattle_scrapers::records::ScrapedEvent;

use crate::domains::events::Event;

/// Persist scraped meetings into the canonical tables, upserting by
/// Legistar identifier.
pub async fn import_events(records: &[ScrapedEvent], pool: &PgPool) -> Result<i32> {
    let mut imported = 0;

    for record in records {
        let legistar_id = record
            .identifier("legistar_event_id")
            .ok_or_else(|| anyhow!("scraped event {} has no Legistar identifier", record.name))?;

        let event = Event::upsert_scraped(
            &record.name,
            record.start_time,
            &record.timezone,
            &record.location,
            &record.status,
            legistar_id,
            serde_json::to_value(&record.agenda)?,
            serde_json::to_value(&record.sources)?,
            pool,
        )
        .await?;

        debug!("Imported event {} ({})", event.name, event.id);
        imported += 1;
    }

    Ok(imported)
}
