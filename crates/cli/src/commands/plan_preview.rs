//! `lineplan plan-preview`: build an engine from CSV inputs (or a
//! synthetic day), admit work orders up to `--now`, and print a
//! read-only projection of the current job and queue as JSON.

use crate::cli::PlanPreviewArgs;
use crate::source;
use anyhow::Context;
use lineplan_core::SimTime;
use lineplan_engine::Engine;

pub fn run(args: PlanPreviewArgs) -> anyhow::Result<()> {
    let src = source::resolve(&args.source)?;

    let now = match &args.now {
        Some(s) => SimTime::parse(s).with_context(|| format!("parsing --now {s:?}"))?,
        None => source::earliest_instant(&src).context("no --now given and no data to infer one from")?,
    };

    let engine = Engine::new(now, src.policy, src.setup_matrix);
    engine.seed_pool(src.work_orders);
    for event in src.events.iter().filter(|e| e.timestamp <= now) {
        engine.handle_event(event.clone());
    }
    engine.advance_to(now);

    let rows = engine.plan_preview(args.limit);
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
