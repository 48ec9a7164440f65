//! `lineplan`: the thin CLI/configuration glue around `lineplan-engine`
//! and `lineplan-storage` (§1, §4: out of scope beyond a local-use
//! wiring layer). Loads CSV inputs or generates a synthetic demo day,
//! runs a day simulation, plan preview, or bounded realtime demo, and
//! prints JSON.

mod cli;
mod commands;
mod source;

use clap::Parser;
use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate(args) => commands::simulate::run(args),
        Command::Generate(args) => commands::generate::run(args),
        Command::PlanPreview(args) => commands::plan_preview::run(args),
        Command::RealtimeDemo(args) => commands::realtime_demo::run(args).await,
    }
}
