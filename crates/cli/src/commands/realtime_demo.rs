//! `lineplan realtime-demo`: exercise the compressed-time realtime
//! driver (§4.9) against loaded or synthetic data for a bounded number
//! of wall-clock seconds, then stop it and print the driver state plus
//! whatever hourly snapshots it collected.

use crate::cli::RealtimeDemoArgs;
use crate::source;
use anyhow::Context;
use lineplan_core::SimTime;
use lineplan_engine::{Engine, RealtimeConfig, RealtimeDriver};
use std::time::Duration;
use tracing::info;

pub async fn run(args: RealtimeDemoArgs) -> anyhow::Result<()> {
    let src = source::resolve(&args.source)?;

    let day_start = match &args.day_start {
        Some(s) => SimTime::parse(s).with_context(|| format!("parsing --day-start {s:?}"))?,
        None => source::earliest_instant(&src).context("no --day-start given and no data to infer one from")?,
    };
    let day_end = match &args.day_end {
        Some(s) => SimTime::parse(s).with_context(|| format!("parsing --day-end {s:?}"))?,
        None => day_start.add_minutes(8 * 60),
    };

    let engine = Engine::new(day_start, src.policy, src.setup_matrix);
    engine.seed_pool(src.work_orders);

    let driver = RealtimeDriver::new(engine);
    let cfg = RealtimeConfig { day_start, day_end, compress_to_seconds: args.compress_to_seconds, tick_seconds: args.tick_seconds };

    if !driver.start(cfg) {
        anyhow::bail!("driver refused to start (already running)");
    }
    info!(?cfg, run_seconds = args.run_seconds, "realtime driver started");

    tokio::time::sleep(Duration::from_secs(args.run_seconds)).await;
    driver.stop().await;

    let state = driver.state();
    let reports = driver.hourly_reports();
    println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "state": state, "hourly_reports": reports }))?);
    Ok(())
}
