//! Work orders: the atomic scheduling unit.

use crate::time::SimTime;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A production job waiting for, or running on, the machine.
///
/// Lifecycle: born in the engine's pool; admitted into the queue once
/// `created_at <= now`; consumed by the dispatcher into `current_job`;
/// removed on completion. A `WorkOrder` is logically immutable once
/// constructed — the engine moves it between collections, it never
/// mutates one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub of_id: SmolStr,
    pub product: String,
    pub format: SmolStr,
    pub created_at: SimTime,
    pub due_date: SimTime,
    pub priority: i32,
    pub qty: u64,
    pub nominal_rate_u_per_h: u64,
    pub nominal_duration_min: u32,
}

impl WorkOrder {
    /// Sort key for queue ordering: `(due_date ascending, priority descending)`.
    pub fn queue_key(&self) -> (SimTime, std::cmp::Reverse<i32>) {
        (self.due_date, std::cmp::Reverse(self.priority))
    }
}

crate::builder! {
    pub struct WorkOrderBuilder => WorkOrder {
        into {
            of_id: SmolStr = "of-1",
            product: String = "widget",
            format: SmolStr = "F1",
        }
        set {
            created_at: SimTime = SimTime::parse("2026-01-05T00:00").unwrap_or_else(|_| unreachable!()),
            due_date: SimTime = SimTime::parse("2026-01-05T16:00").unwrap_or_else(|_| unreachable!()),
            priority: i32 = 5,
            qty: u64 = 1000,
            nominal_rate_u_per_h: u64 = 1000,
            nominal_duration_min: u32 = 60,
        }
    }
}

#[cfg(test)]
#[path = "work_order_tests.rs"]
mod tests;
