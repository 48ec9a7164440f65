#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lineplan-storage: CSV ingestion/persistence for work orders, the setup
//! matrix, and events, plus a synthetic demo-day generator for local
//! development and tests.
//!
//! Unlike the engine's internal tolerant/journaled error handling, these
//! loaders fail loudly (`Result<_, StorageError>`): CSV ingestion happens
//! once at process startup, before any `Engine` exists to journal a
//! malformed row.

pub mod csv_util;
pub mod error;
pub mod events;
pub mod setup_matrix;
pub mod synthetic;
pub mod work_orders;
pub mod writer;

pub use error::StorageError;
pub use events::load_events;
pub use setup_matrix::load_setup_matrix;
pub use synthetic::{generate_day, generate_setup_matrix, SyntheticDayConfig};
pub use work_orders::load_work_orders;
pub use writer::{write_events, write_setup_matrix, write_work_orders};
