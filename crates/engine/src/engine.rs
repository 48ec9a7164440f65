//! The `Engine` façade: a single coarse-grained lock around `EngineState`
//! exposing the public operation surface. Mirrors the split between pure
//! state (`lineplan-core`) and the mutex-guarded runtime that mutates it
//! (`lineplan-engine`).

use crate::plan_preview::PlanRow;
use crate::{admission, day_simulator, dispatcher, handle_event, plan_preview, time_engine};
use lineplan_core::{Event, EngineState, IncomingEvent, JournalEntry, SchedulerConfig, SetupMatrix, SimTime};
use parking_lot::Mutex;
use std::sync::Arc;

/// A scheduling engine instance. Cheap to clone as a handle (`Arc`); use
/// [`Engine::deep_clone`] to get an independent copy for offline
/// simulation, per §5's cloning contract.
#[derive(Clone)]
pub struct Engine {
    state: Arc<Mutex<EngineState>>,
}

impl Engine {
    pub fn new(now: SimTime, policy: SchedulerConfig, setup_matrix: SetupMatrix) -> Self {
        Self { state: Arc::new(Mutex::new(EngineState::new(now, policy, setup_matrix))) }
    }

    pub fn from_state(state: EngineState) -> Self {
        Self { state: Arc::new(Mutex::new(state)) }
    }

    pub fn get_state(&self) -> EngineState {
        self.state.lock().clone()
    }

    /// Seed the pool with work orders known ahead of time. Does not
    /// admit them; the next `refresh_queue_from_pool` (triggered by
    /// time advance or event handling) does that.
    pub fn seed_pool(&self, orders: Vec<lineplan_core::WorkOrder>) {
        self.state.lock().pool.extend(orders);
    }

    /// Jump `now` directly to `target`, with no minute-stepping and no
    /// KPI accounting — time moves, work does not un-happen (§7).
    pub fn set_time(&self, target: SimTime) -> SimTime {
        let mut st = self.state.lock();
        st.now = target;
        st.now
    }

    pub fn handle_event(&self, ev: Event) -> JournalEntry {
        let mut st = self.state.lock();
        handle_event::handle_event(&mut st, ev)
    }

    pub fn handle_incoming(&self, receive_time: SimTime, ev: Event, source: String) -> JournalEntry {
        let mut st = self.state.lock();
        handle_event::handle_incoming(&mut st, receive_time, ev, source)
    }

    /// Advance `now` to `target` through the full minute-stepping
    /// contract (KPI accounting, setup/work phases), then refresh
    /// admission and attempt dispatch — the same sequence `handle_incoming`
    /// runs before processing its event.
    pub fn advance_to(&self, target: SimTime) {
        let mut st = self.state.lock();
        time_engine::advance_to(&mut st, target);
        admission::refresh_queue_from_pool(&mut st);
        dispatcher::start_next_if_possible(&mut st);
    }

    pub fn get_event_log(&self, limit: usize) -> Vec<JournalEntry> {
        let st = self.state.lock();
        let start = st.event_log.len().saturating_sub(limit);
        st.event_log[start..].to_vec()
    }

    pub fn simulate_day(
        &self,
        day_start: SimTime,
        day_end: SimTime,
        incoming: Vec<IncomingEvent>,
        report_every_min: u32,
    ) -> day_simulator::SimResult {
        let st = self.state.lock();
        day_simulator::simulate_day(&st, day_start, day_end, incoming, report_every_min)
    }

    /// Project the current job and queue, in their existing order,
    /// forward through time — a read-only preview, not a reordering.
    pub fn plan_preview(&self, limit: usize) -> Vec<PlanRow> {
        let st = self.state.lock();
        plan_preview::preview(&st, limit)
    }

    /// An independent deep copy: state is cloned, the lock is fresh. Used
    /// strictly for offline simulation; never aliases the live engine.
    pub fn deep_clone(&self) -> Self {
        Self::from_state(self.get_state())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
