#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lineplan-engine: the mutable runtime that drives `EngineState` through
//! time and events.
//!
//! `Engine` (in [`engine`]) is the public façade: a single coarse-grained
//! lock around the state, exposing event handling, day simulation, plan
//! preview, and the realtime driver. Everything else in this crate is a
//! pure function over `&mut EngineState` that `Engine` sequences under
//! the lock.

pub mod admission;
pub mod applier;
pub mod day_simulator;
pub mod dispatcher;
pub mod engine;
pub mod handle_event;
pub mod plan_preview;
pub mod realtime;
pub mod replan;
pub mod time_engine;

pub use day_simulator::{SimResult, SimStats, Snapshot};
pub use engine::Engine;
pub use plan_preview::PlanRow;
pub use realtime::{DriverState, RealtimeConfig, RealtimeDriver};
