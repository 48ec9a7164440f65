//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{SetupMatrix, SimTime, WorkOrder};

/// Proptest strategies for core data types.
pub mod strategies {
    use super::*;
    use proptest::prelude::*;

    pub fn arb_format() -> impl Strategy<Value = String> {
        prop_oneof![Just("F1"), Just("F2"), Just("F3"), Just("F4")].prop_map(str::to_string)
    }

    pub fn arb_work_order() -> impl Strategy<Value = WorkOrder> {
        (
            "of-[a-z0-9]{4,8}",
            arb_format(),
            0i32..10,
            1u64..100_000,
            1u32..600,
            0i64..600,
        )
            .prop_map(|(of_id, format, priority, qty, duration, due_offset_min)| {
                let created_at = day_start();
                WorkOrder {
                    of_id: of_id.into(),
                    product: "widget".to_string(),
                    format: format.into(),
                    created_at,
                    due_date: created_at.add_minutes(due_offset_min),
                    priority,
                    qty,
                    nominal_rate_u_per_h: 1000,
                    nominal_duration_min: duration,
                }
            })
    }
}

pub fn day_start() -> SimTime {
    SimTime::parse("2026-01-05T08:00").unwrap_or_else(|e| unreachable!("{e}"))
}

/// A small 3-format setup matrix with asymmetric costs, for tests that
/// need setup cost to matter.
pub fn sample_setup_matrix() -> SetupMatrix {
    let mut m = SetupMatrix::new();
    m.insert("F1", "F2", 10);
    m.insert("F2", "F1", 12);
    m.insert("F1", "F3", 40);
    m.insert("F3", "F1", 40);
    m.insert("F2", "F3", 25);
    m.insert("F3", "F2", 25);
    m
}
