//! Format-to-format setup cost table.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::HashMap;

/// Minutes required to switch the machine from one format to another.
///
/// Immutable once built (§5: shared by reference across engine clones).
/// Missing pairs — including any lookup with `from = None` — default to
/// zero minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupMatrix {
    costs: HashMap<(SmolStr, SmolStr), u32>,
}

impl SetupMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: impl Into<SmolStr>, to: impl Into<SmolStr>, minutes: u32) {
        self.costs.insert((from.into(), to.into()), minutes);
    }

    /// Setup minutes to go from `from` to `to`. `from = None` (no prior
    /// format, e.g. a freshly-started machine) always costs 0.
    pub fn lookup(&self, from: Option<&str>, to: &str) -> u32 {
        let Some(from) = from else { return 0 };
        self.costs.get(&(SmolStr::new(from), SmolStr::new(to))).copied().unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "setup_matrix_tests.rs"]
mod tests;
