use std::sync::Arc;

use anyhow::Context;
use tokio::sync::watch;
use tracing::info;

use megaverse_client::EntityClient;
use megaverse_core::{MegaverseConfig, render};
use megaverse_scheduler::{PlacementScheduler, SchedulerOptions};

pub async fn build(
    config: MegaverseConfig,
    concurrency: Option<usize>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let client = super::client(&config)?;

    let mut options = SchedulerOptions::from_config(&config.scheduler)?;
    if let Some(n) = concurrency {
        options.max_concurrency = n;
    }

    let grid = client.fetch_goal().await.context("fetching goal map")?;
    println!("{}", render(&grid));

    if dry_run || !config.make_requests() {
        info!("dry run; no entities created");
        return Ok(());
    }

    let client: Arc<dyn EntityClient> = Arc::new(client);
    let scheduler = PlacementScheduler::new(client, options)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let report = scheduler.reconstruct(&grid, shutdown_rx).await;
    print!("{report}");

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} placements failed",
            report.failed(),
            report.records.len()
        );
    }
    Ok(())
}
