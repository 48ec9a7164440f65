//! Argument parsing for the `lineplan` binary — thin CLI/configuration
//! glue, kept to a local-use wiring layer rather than a full service
//! surface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

#[derive(Debug, Parser)]
#[command(name = "lineplan", version = VERSION, about = "Single-machine shop-floor scheduler")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run an offline day simulation against CSV inputs (or a synthetic
    /// demo day) and print the resulting `SimResult` as JSON.
    Simulate(SimulateArgs),
    /// Generate a synthetic demo day (work orders, setup matrix, events)
    /// and write it to a directory as CSVs.
    Generate(GenerateArgs),
    /// Build an engine from CSV inputs (or a synthetic demo day), advance
    /// it to a point in time, and print a plan preview as JSON.
    PlanPreview(PlanPreviewArgs),
    /// Run the compressed-time realtime driver against a synthetic or
    /// loaded day for a fixed number of wall-clock seconds, then stop it
    /// and print the hourly snapshots collected.
    RealtimeDemo(RealtimeDemoArgs),
}

#[derive(Debug, Args)]
pub struct DataSourceArgs {
    /// Directory containing `work_orders.csv`, `setup_matrix.csv`, and
    /// `events.csv`. When omitted, a synthetic demo day is generated
    /// in-memory using `--seed` / `--days` instead.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Scheduler policy as TOML (late policy, thresholds, optimizer
    /// weights). Defaults to `SchedulerConfig::default()`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for synthetic data generation, used only when `--data-dir`
    /// is omitted.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of days to generate, used only when `--data-dir` is
    /// omitted.
    #[arg(long, default_value_t = 14)]
    pub days: u32,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub source: DataSourceArgs,

    /// Simulated window start, ISO-8601 minute resolution
    /// (`2026-01-05T08:00`). Defaults to the synthetic/loaded data's
    /// earliest shift start when omitted.
    #[arg(long)]
    pub day_start: Option<String>,

    /// Simulated window end, ISO-8601 minute resolution. Defaults to
    /// `day_start + 8h` when omitted.
    #[arg(long)]
    pub day_end: Option<String>,

    /// Emit a snapshot every N simulated minutes.
    #[arg(long, default_value_t = 60)]
    pub report_every_min: u32,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory to write `work_orders.csv`, `setup_matrix.csv`, and
    /// `events.csv` into.
    #[arg(long)]
    pub out_dir: PathBuf,

    /// Seed for the synthetic generator.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of days to generate.
    #[arg(long, default_value_t = 14)]
    pub days: u32,
}

#[derive(Debug, Args)]
pub struct PlanPreviewArgs {
    #[command(flatten)]
    pub source: DataSourceArgs,

    /// Advance the engine to this instant before taking the preview.
    /// Defaults to the data's earliest shift start.
    #[arg(long)]
    pub now: Option<String>,

    /// Maximum number of rows to return.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct RealtimeDemoArgs {
    #[command(flatten)]
    pub source: DataSourceArgs,

    /// Simulated window start. Defaults to the data's earliest shift
    /// start.
    #[arg(long)]
    pub day_start: Option<String>,

    /// Simulated window end. Defaults to `day_start + 8h`.
    #[arg(long)]
    pub day_end: Option<String>,

    /// Wall-clock seconds the whole simulated window is compressed into.
    #[arg(long, default_value_t = 60.0)]
    pub compress_to_seconds: f64,

    /// Wall-clock seconds between ticker advances.
    #[arg(long, default_value_t = 0.5)]
    pub tick_seconds: f64,

    /// Wall-clock seconds to let the driver run before stopping it and
    /// printing what it collected (it also stops on its own once
    /// simulated time reaches `day_end`).
    #[arg(long, default_value_t = 10)]
    pub run_seconds: u64,
}
