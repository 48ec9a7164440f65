//! `lineplan simulate`: load or generate a day's worth of work orders,
//! events, and a setup matrix; run `Engine::simulate_day`; print the
//! resulting `SimResult` as JSON.

use crate::cli::SimulateArgs;
use crate::source;
use anyhow::Context;
use lineplan_core::{IncomingEvent, SimTime};
use lineplan_engine::Engine;
use tracing::info;

pub fn run(args: SimulateArgs) -> anyhow::Result<()> {
    let src = source::resolve(&args.source)?;

    let day_start = match &args.day_start {
        Some(s) => SimTime::parse(s).with_context(|| format!("parsing --day-start {s:?}"))?,
        None => source::earliest_instant(&src).context("no --day-start given and no data to infer one from")?,
    };
    let day_end = match &args.day_end {
        Some(s) => SimTime::parse(s).with_context(|| format!("parsing --day-end {s:?}"))?,
        None => day_start.add_minutes(8 * 60),
    };

    info!(%day_start, %day_end, work_orders = src.work_orders.len(), events = src.events.len(), "simulating day");

    let engine = Engine::new(day_start, src.policy, src.setup_matrix);
    engine.seed_pool(src.work_orders);

    let incoming: Vec<IncomingEvent> =
        src.events.into_iter().map(|event| IncomingEvent { receive_time: event.timestamp, event, source: "csv".to_string() }).collect();

    let result = engine.simulate_day(day_start, day_end, incoming, args.report_every_min);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
