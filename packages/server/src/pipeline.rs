//! Sequential stage runner for the update pipeline.
//!
//! Scrape runs to completion, then sync, then index rebuild. The first
//! failure aborts the remaining stages - there is no retry or
//! partial-failure recovery.

use std::future::Future;

use anyhow::{Context, Result};
use colored::Colorize;
use futures::future::BoxFuture;

/// One pipeline stage: a banner name and the work itself.
pub struct Stage<'a> {
    pub name: &'static str,
    run: Box<dyn FnOnce() -> BoxFuture<'a, Result<()>> + Send + 'a>,
}

impl<'a> Stage<'a> {
    pub fn new<F, Fut>(name: &'static str, f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<()>> + Send + 'a,
    {
        Self {
            name,
            run: Box::new(move || Box::pin(f())),
        }
    }
}

/// Run stages in order, printing a banner before each. Returns the
/// first stage error without executing the stages after it.
pub async fn run_stages(stages: Vec<Stage<'_>>) -> Result<()> {
    let total = stages.len();

    for (index, stage) in stages.into_iter().enumerate() {
        println!();
        println!(
            "{}",
            format!("==> [{}/{}] {}", index + 1, total, stage.name)
                .bright_cyan()
                .bold()
        );

        (stage.run)()
            .await
            .with_context(|| format!("stage '{}' failed", stage.name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn runs_all_stages_in_order() {
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));

        let stages = vec![
            {
                let log = log.clone();
                Stage::new("first", move || async move {
                    log.lock().unwrap().push("first");
                    Ok(())
                })
            },
            {
                let log = log.clone();
                Stage::new("second", move || async move {
                    log.lock().unwrap().push("second");
                    Ok(())
                })
            },
        ];

        run_stages(stages).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn failure_halts_before_later_stages() {
        let executed = Arc::new(AtomicUsize::new(0));

        let stages = vec![
            Stage::new("scrape", || async { Ok(()) }),
            Stage::new("sync", || async { Err(anyhow!("database unreachable")) }),
            {
                let executed = executed.clone();
                Stage::new("index", move || async move {
                    executed.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
            },
        ];

        let result = run_stages(stages).await;

        let err = result.expect_err("pipeline should fail");
        assert!(err.to_string().contains("sync"));
        assert_eq!(
            executed.load(Ordering::SeqCst),
            0,
            "stage after the failure must not run"
        );
    }
}
