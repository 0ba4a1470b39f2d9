use anyhow::{anyhow, Result};
use sqlx::PgPool;
use tracing::debug;

use seattle_scrapers::records::ScrapedPerson;

use crate::domains::organizations::{Organization, Post};
use crate::domains::people::{Membership, Person};

/// Persist scraped council members into the canonical tables.
///
/// People upsert by name; memberships upsert by (person, organization,
/// post label). A membership naming an unknown organization is an
/// error - the jurisdiction seed should have created it.
pub async fn import_people(records: &[ScrapedPerson], pool: &PgPool) -> Result<i32> {
    let mut imported = 0;

    for record in records {
        let person = Person::upsert_scraped(
            &record.name,
            serde_json::to_value(&record.sources)?,
            serde_json::to_value(&record.links)?,
            serde_json::to_value(&record.contact_details)?,
            pool,
        )
        .await?;

        for membership in &record.memberships {
            let org = Organization::find_by_name(&membership.organization, pool)
                .await?
                .ok_or_else(|| {
                    anyhow!(
                        "membership for {} references unknown organization: {}",
                        record.name,
                        membership.organization
                    )
                })?;

            let post = Post::find_by_label(&org.id, &membership.label, pool).await?;

            Membership::upsert(
                &person.id,
                &org.id,
                post.as_ref().map(|p| p.id.as_str()),
                &membership.role,
                &membership.label,
                pool,
            )
            .await?;
        }

        debug!("Imported person {} ({})", person.name, person.id);
        imported += 1;
    }

    Ok(imported)
}
