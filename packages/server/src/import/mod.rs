//! Scrape-and-import: runs the jurisdiction's scrapers and persists
//! their output into the canonical tables.
//!
//! Canonical rows are created and refreshed here and nowhere else.
//! Upserts key on natural identifiers (person name, Legistar event id)
//! so re-running a scrape is idempotent. A failed scraper marks its
//! import run failed and aborts the remaining scrapers.

pub mod events;
pub mod organizations;
pub mod people;
pub mod run;

pub use run::ImportRun;

use anyhow::Result;
use sqlx::PgPool;
use tracing::{error, info};

use seattle_scrapers::events::EventScraper;
use seattle_scrapers::people::PersonScraper;
use seattle_scrapers::records::Scraper;
use seattle_scrapers::{Jurisdiction, ScraperKind};

pub struct Importer {
    jurisdiction: Jurisdiction,
    pool: PgPool,
}

impl Importer {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jurisdiction: Jurisdiction::seattle(),
            pool,
        }
    }

    /// Run the requested scrapers in order, tracking each as an import
    /// run. The jurisdiction's organizations are seeded first so
    /// memberships can resolve them by name.
    pub async fn run(&self, kinds: &[ScraperKind]) -> Result<Vec<ImportRun>> {
        organizations::seed_organizations(&self.jurisdiction, &self.pool).await?;

        let mut runs = Vec::new();
        for kind in kinds {
            runs.push(self.run_scraper(*kind).await?);
        }
        Ok(runs)
    }

    async fn run_scraper(&self, kind: ScraperKind) -> Result<ImportRun> {
        info!("Starting {} scrape for {}", kind.as_str(), self.jurisdiction.name);
        let run = ImportRun::start(self.jurisdiction.name, kind.as_str(), &self.pool).await?;

        match self.scrape_and_import(kind).await {
            Ok((scraped, imported)) => {
                let run = run.succeed(scraped, imported, &self.pool).await?;
                info!(
                    "Imported {}/{} {} records",
                    run.records_imported, run.records_scraped, run.scraper
                );
                Ok(run)
            }
            Err(e) => {
                error!("{} scrape failed: {}", kind.as_str(), e);
                if let Err(record_err) = run.fail(&e.to_string(), &self.pool).await {
                    error!("Failed to record import failure: {}", record_err);
                }
                Err(e)
            }
        }
    }

    async fn scrape_and_import(&self, kind: ScraperKind) -> Result<(i32, i32)> {
        match kind {
            ScraperKind::People => {
                let scraper = PersonScraper::new()?;
                let records = scraper.scrape().await?;
                let imported = people::import_people(&records, &self.pool).await?;
                Ok((records.len() as i32, imported))
            }
            ScraperKind::Events => {
                let scraper = EventScraper::new()?;
                let records = scraper.scrape().await?;
                let imported = events::import_events(&records, &self.pool).await?;
                Ok((records.len() as i32, imported))
            }
        }
    }
}
