// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lineplan-core: data model for a single-machine shop-floor scheduler.
//!
//! Pure types only — `WorkOrder`, `Event`, `SetupMatrix`, `EngineState`,
//! `JournalEntry` — and the config/error scaffolding they sit on.
//! The state machine that mutates `EngineState` lives in
//! `lineplan-engine`.

pub mod macros;

pub mod config;
pub mod event;
pub mod journal;
pub mod setup_matrix;
pub mod state;
pub mod time;
pub mod work_order;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ConfigError, OptimizerWeights, SchedulerConfig};
pub use event::{Event, EventType, IncomingEvent, LatePolicy};
pub use journal::{JournalEntry, JournalStatus};
pub use setup_matrix::SetupMatrix;
pub use state::{BreakdownTracker, CompletedOrder, CurrentJob, EngineState, KpiCounters};
pub use time::{SimTime, SimTimeParseError};
pub use work_order::WorkOrder;
