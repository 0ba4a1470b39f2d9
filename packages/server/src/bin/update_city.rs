//! Update pipeline wrapper: scrape & import, sync, rebuild the search
//! index - in that order, aborting on the first failure.
//!
//! Arguments pass through to the scrape stage as scraper names.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use councilmatic_core::import::Importer;
use councilmatic_core::pipeline::{run_stages, Stage};
use councilmatic_core::{search, sync, Config};
use seattle_scrapers::ScraperKind;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "update_city")]
#[command(about = "Scrape, sync, and index Seattle City Council data")]
struct Cli {
    /// Scrapers to run (passed through to the scrape stage)
    #[arg(default_values_t = vec!["people".to_string(), "events".to_string()])]
    scrapers: Vec<String>,

    /// Skip scraping and only run sync + index rebuild
    #[arg(long)]
    skip_scrape: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,councilmatic_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let kinds = cli
        .scrapers
        .iter()
        .map(|name| name.parse::<ScraperKind>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid scraper name")?;

    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let mut stages = Vec::new();

    if !cli.skip_scrape {
        let pool = pool.clone();
        stages.push(Stage::new("Scrape & import", move || async move {
            Importer::new(pool).run(&kinds).await?;
            Ok(())
        }));
    }

    {
        let pool = pool.clone();
        stages.push(Stage::new("Sync councilmatic models", move || async move {
            sync::sync_all(&pool).await?;
            Ok(())
        }));
    }

    {
        let pool = pool.clone();
        stages.push(Stage::new("Rebuild search index", move || async move {
            search::rebuild_index(&pool).await?;
            Ok(())
        }));
    }

    match run_stages(stages).await {
        Ok(()) => {
            println!();
            println!("{}", "✓ Update complete!".bright_green().bold());
            Ok(())
        }
        Err(e) => {
            eprintln!();
            eprintln!("{} {:#}", "✗ Update failed:".bright_red().bold(), e);
            std::process::exit(1);
        }
    }
}
