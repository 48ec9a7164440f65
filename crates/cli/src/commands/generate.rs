//! `lineplan generate`: write a synthetic demo day's `work_orders.csv`,
//! `setup_matrix.csv`, and `events.csv` to a directory, the same three
//! files `original_source/generate_file.py` produced.

use crate::cli::GenerateArgs;
use anyhow::Context;
use lineplan_storage::{generate_day, generate_setup_matrix, write_events, write_setup_matrix, write_work_orders, SyntheticDayConfig};
use tracing::info;

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = SyntheticDayConfig { days: args.days, ..SyntheticDayConfig::default() };
    let (work_orders, events) = generate_day(&cfg, args.seed);
    let setup_matrix = generate_setup_matrix(&cfg, args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    write_work_orders(&args.out_dir.join("work_orders.csv"), &work_orders)?;
    write_setup_matrix(&args.out_dir.join("setup_matrix.csv"), &cfg.formats, &setup_matrix)?;
    write_events(&args.out_dir.join("events.csv"), &events)?;

    info!(
        out_dir = %args.out_dir.display(),
        work_orders = work_orders.len(),
        events = events.len(),
        seed = args.seed,
        "generated synthetic demo day"
    );
    println!(
        "generated {} work orders and {} events in {}",
        work_orders.len(),
        events.len(),
        args.out_dir.display()
    );
    Ok(())
}
