//! Resolves `DataSourceArgs` into the three inputs an `Engine` needs:
//! work orders, events, and a setup matrix — either loaded from CSV or
//! generated synthetically, plus the policy config.

use crate::cli::DataSourceArgs;
use anyhow::Context;
use lineplan_core::{Event, SchedulerConfig, SetupMatrix, WorkOrder};
use lineplan_storage::{generate_day, generate_setup_matrix, SyntheticDayConfig};

pub struct Source {
    pub work_orders: Vec<WorkOrder>,
    pub events: Vec<Event>,
    pub setup_matrix: SetupMatrix,
    pub policy: SchedulerConfig,
}

pub fn resolve(args: &DataSourceArgs) -> anyhow::Result<Source> {
    let policy = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading scheduler config {}", path.display()))?;
            SchedulerConfig::from_toml(&text).with_context(|| format!("parsing scheduler config {}", path.display()))?
        }
        None => SchedulerConfig::default(),
    };

    let (work_orders, events, setup_matrix) = match &args.data_dir {
        Some(dir) => {
            let work_orders = lineplan_storage::load_work_orders(&dir.join("work_orders.csv"))
                .with_context(|| format!("loading work orders from {}", dir.display()))?;
            let events = lineplan_storage::load_events(&dir.join("events.csv"))
                .with_context(|| format!("loading events from {}", dir.display()))?;
            let setup_matrix = lineplan_storage::load_setup_matrix(&dir.join("setup_matrix.csv"))
                .with_context(|| format!("loading setup matrix from {}", dir.display()))?;
            (work_orders, events, setup_matrix)
        }
        None => {
            let cfg = SyntheticDayConfig { days: args.days, ..SyntheticDayConfig::default() };
            let (work_orders, events) = generate_day(&cfg, args.seed);
            let setup_matrix = generate_setup_matrix(&cfg, args.seed);
            (work_orders, events, setup_matrix)
        }
    };

    Ok(Source { work_orders, events, setup_matrix, policy })
}

/// The earliest instant any input references — work order creation or
/// event timestamp — used as the default simulation/preview start when
/// the caller doesn't pin one explicitly.
pub fn earliest_instant(source: &Source) -> Option<lineplan_core::SimTime> {
    source
        .work_orders
        .iter()
        .map(|w| w.created_at)
        .chain(source.events.iter().map(|e| e.timestamp))
        .min()
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
