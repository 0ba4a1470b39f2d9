use anyhow::Result;
use sqlx::PgPool;
use tracing::debug;

use seattle_scrapers::Jurisdiction;

use crate::domains::organizations::{Organization, Post};

/// Create the jurisdiction's organizations and their posts if missing.
/// Runs before every import so scraped memberships always resolve.
pub async fn seed_organizations(jurisdiction: &Jurisdiction, pool: &PgPool) -> Result<()> {
    for org_def in jurisdiction.organizations() {
        let org = Organization::upsert(&org_def.name, &org_def.classification, pool).await?;
        for post_def in &org_def.posts {
            Post::upsert(&org.id, &post_def.label, &post_def.role, pool).await?;
        }
        debug!("Seeded organization {} ({} posts)", org.name, org_def.posts.len());
    }
    Ok(())
}
