//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! One job: the nightly scrape -> sync -> index update. Failures are
//! logged and the server keeps running; the next night retries.

use anyhow::Result;
use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler};

use seattle_scrapers::Jurisdiction;

use crate::import::Importer;
use crate::{search, sync};

/// Start the scheduler with the nightly update job.
pub async fn start_scheduler(pool: PgPool) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    // 08:00 UTC is midnight Pacific
    let update_pool = pool.clone();
    let update_job = Job::new_async("0 0 8 * * *", move |_uuid, _lock| {
        let pool = update_pool.clone();
        Box::pin(async move {
            if let Err(e) = run_nightly_update(&pool).await {
                tracing::error!("Nightly update failed: {:#}", e);
            }
        })
    })?;

    scheduler.add(update_job).await?;
    scheduler.start().await?;

    Ok(scheduler)
}

async fn run_nightly_update(pool: &PgPool) -> Result<()> {
    let kinds = Jurisdiction::seattle().scrapers();

    Importer::new(pool.clone()).run(&kinds).await?;
    sync::sync_all(pool).await?;
    search::rebuild_index(pool).await?;

    tracing::info!("Nightly update complete");
    Ok(())
}
