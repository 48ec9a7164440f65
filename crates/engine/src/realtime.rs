//! Realtime driver: runs an [`Engine`] against wall-clock time at a
//! configurable compression ratio. Owns a background ticker task,
//! cancelled via a `CancellationToken` the way a connection listener
//! races a handler against disconnect detection.

use crate::day_simulator::Snapshot;
use crate::engine::Engine;
use lineplan_core::{Event, EventType, SimTime};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealtimeConfig {
    pub day_start: SimTime,
    pub day_end: SimTime,
    pub compress_to_seconds: f64,
    pub tick_seconds: f64,
}

impl RealtimeConfig {
    fn sim_min_per_tick(&self) -> f64 {
        let day_minutes = self.day_start.minutes_until(self.day_end) as f64;
        let sim_min_per_sec = day_minutes / self.compress_to_seconds.max(1e-9);
        sim_min_per_sec * self.tick_seconds
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverState {
    pub running: bool,
    pub config: Option<RealtimeConfig>,
    pub next_report: Option<SimTime>,
    pub now: SimTime,
}

struct Inner {
    running: bool,
    config: Option<RealtimeConfig>,
    cancel: Option<CancellationToken>,
    handle: Option<JoinHandle<()>>,
    accumulator: f64,
    current_hour: Option<SimTime>,
    reports: Vec<Snapshot>,
}

impl Default for Inner {
    fn default() -> Self {
        Self { running: false, config: None, cancel: None, handle: None, accumulator: 0.0, current_hour: None, reports: Vec::new() }
    }
}

/// Drives `engine` against wall-clock time. Cheap to clone (shares the
/// engine handle and its own internal lock); typically held as a single
/// long-lived instance per process.
#[derive(Clone)]
pub struct RealtimeDriver {
    engine: Engine,
    inner: Arc<Mutex<Inner>>,
}

impl RealtimeDriver {
    pub fn new(engine: Engine) -> Self {
        Self { engine, inner: Arc::new(Mutex::new(Inner::default())) }
    }

    /// Rejects if already running. Resets the engine to `cfg.day_start`,
    /// emits a synthetic `SHIFT_START`, clears accumulated snapshots, and
    /// spawns the ticker.
    pub fn start(&self, cfg: RealtimeConfig) -> bool {
        let mut inner = self.inner.lock();
        if inner.running {
            return false;
        }

        self.engine.set_time(cfg.day_start);
        self.engine.handle_event(Event::new(cfg.day_start, EventType::ShiftStart, ""));

        inner.config = Some(cfg);
        inner.accumulator = 0.0;
        inner.current_hour = Some(cfg.day_start);
        inner.reports.clear();

        let cancel = CancellationToken::new();
        inner.cancel = Some(cancel.clone());
        inner.running = true;

        let engine = self.engine.clone();
        let inner_handle = self.inner.clone();
        let handle = tokio::spawn(async move {
            run_ticker(engine, inner_handle, cfg, cancel).await;
        });
        inner.handle = Some(handle);
        info!(?cfg, "realtime driver started");
        true
    }

    /// Signals cancellation and joins the ticker with a short timeout.
    /// Returns `false` if the driver was not running.
    pub async fn stop(&self) -> bool {
        let (cancel, handle) = {
            let mut inner = self.inner.lock();
            if !inner.running {
                return false;
            }
            inner.running = false;
            (inner.cancel.take(), inner.handle.take())
        };

        if let Some(cancel) = cancel {
            cancel.cancel();
        }
        if let Some(handle) = handle {
            if tokio::time::timeout(Duration::from_secs(2), handle).await.is_err() {
                warn!("realtime ticker did not join within 2s budget");
            }
        }
        true
    }

    pub fn state(&self) -> DriverState {
        let inner = self.inner.lock();
        DriverState {
            running: inner.running,
            config: inner.config,
            next_report: inner.current_hour,
            now: self.engine.get_state().now,
        }
    }

    pub fn hourly_reports(&self) -> Vec<Snapshot> {
        self.inner.lock().reports.clone()
    }
}

async fn run_ticker(engine: Engine, inner: Arc<Mutex<Inner>>, cfg: RealtimeConfig, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(Duration::from_secs_f64(cfg.tick_seconds.max(0.001)));
    let sim_min_per_tick = cfg.sim_min_per_tick();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("realtime ticker cancelled");
                break;
            }
            _ = ticker.tick() => {
                let whole = {
                    let mut g = inner.lock();
                    g.accumulator += sim_min_per_tick;
                    let whole = g.accumulator.floor();
                    g.accumulator -= whole;
                    whole as i64
                };
                if whole > 0 {
                    let before = engine.get_state().now;
                    let target = before.add_minutes(whole);
                    engine.advance_to(target);
                    emit_hour_crossings(&engine, &inner, before, target);
                }
                if engine.get_state().now >= cfg.day_end {
                    inner.lock().running = false;
                    break;
                }
            }
        }
    }
}

fn emit_hour_crossings(engine: &Engine, inner: &Arc<Mutex<Inner>>, before: SimTime, after: SimTime) {
    let mut g = inner.lock();
    let mut boundary = g.current_hour.unwrap_or(before);
    while boundary.add_minutes(60) <= after {
        boundary = boundary.add_minutes(60);
        let state = engine.get_state();
        g.reports.push(crate::day_simulator::Snapshot {
            at: boundary,
            kpi: state.kpi,
            current_format: state.current_format.clone(),
            current_job_of_id: state.current_job.as_ref().map(|j| j.work_order.of_id.clone()),
            queue_len: state.queue.len(),
            completed_count: state.completed.len(),
        });
    }
    g.current_hour = Some(boundary);
}

#[cfg(test)]
#[path = "realtime_tests.rs"]
mod tests;
