//! Synthetic demo-day generator for local development and tests: a
//! config struct plus a handful of pure sampling functions seeded from a
//! single `u64`, rather than a line-by-line port of the original
//! French-commented CLI script this is based on.
//!
//! Nothing here reads or writes CSV — `lineplan-cli` hands the generated
//! `Vec<WorkOrder>` / `Vec<Event>` / `SetupMatrix` straight to the engine,
//! or to `crate::work_orders` / `crate::events` / `crate::setup_matrix`'s
//! write-side counterparts for a demo data directory.

use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, NaiveDateTime, Weekday};
use lineplan_core::{Event, EventType, SetupMatrix, SimTime, WorkOrder};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Tunable knobs for one synthetic demo day/week/fortnight. Field-for-field
/// equivalent of the Python prototype's `CONFIG` dict, with Rust types
/// (hour/minute pairs instead of `"HH:MM"` strings, inclusive `(min, max)`
/// ranges instead of 2-tuples).
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticDayConfig {
    pub start_date: NaiveDate,
    pub days: u32,
    pub formats: Vec<String>,

    pub of_per_day_mean: f64,
    pub of_per_day_min: u32,
    pub of_per_day_max: u32,

    pub shift_start: (u32, u32),
    pub shift_end: (u32, u32),
    pub lunch_start: (u32, u32),
    pub lunch_end: (u32, u32),

    pub nominal_rate_min: u64,
    pub nominal_rate_max: u64,

    pub qty_small: (u64, u64),
    pub qty_medium: (u64, u64),
    pub qty_large: (u64, u64),
    pub p_small: f64,
    pub p_large: f64,

    pub due_days_min: i64,
    pub due_days_max: i64,
    pub p_tight_due: f64,

    pub setup_same: u32,
    pub setup_close_range: (u32, u32),
    pub setup_far_range: (u32, u32),

    pub major_breakdown_every_n_days: u32,
    pub major_breakdown_duration_min: (u32, u32),
    pub micro_breakdowns_per_day_range: (u32, u32),
    pub micro_breakdown_duration_min: (u32, u32),

    pub urgent_orders_per_week_range: (u32, u32),
    pub urgent_time_window: ((u32, u32), (u32, u32)),
    pub urgent_due_same_day_prob: f64,

    pub speed_drift_probability_per_day: f64,
    pub speed_factor_range: (f64, f64),
    pub speed_drift_duration_min: (u32, u32),
}

impl Default for SyntheticDayConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_else(|| unreachable!()),
            days: 14,
            formats: ["F1", "F2", "F3", "F4", "F5", "F6"].iter().map(|s| s.to_string()).collect(),

            of_per_day_mean: 12.0,
            of_per_day_min: 8,
            of_per_day_max: 20,

            shift_start: (8, 0),
            shift_end: (16, 0),
            lunch_start: (12, 0),
            lunch_end: (12, 30),

            nominal_rate_min: 8_000,
            nominal_rate_max: 14_000,

            qty_small: (2_000, 8_000),
            qty_medium: (8_000, 30_000),
            qty_large: (30_000, 80_000),
            p_small: 0.10,
            p_large: 0.15,

            due_days_min: 0,
            due_days_max: 5,
            p_tight_due: 0.18,

            setup_same: 0,
            setup_close_range: (5, 15),
            setup_far_range: (20, 55),

            major_breakdown_every_n_days: 5,
            major_breakdown_duration_min: (60, 180),
            micro_breakdowns_per_day_range: (3, 8),
            micro_breakdown_duration_min: (5, 15),

            urgent_orders_per_week_range: (2, 6),
            urgent_time_window: ((9, 0), (15, 0)),
            urgent_due_same_day_prob: 0.75,

            speed_drift_probability_per_day: 0.20,
            speed_factor_range: (0.6, 0.9),
            speed_drift_duration_min: (45, 120),
        }
    }
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

fn at(day: NaiveDate, (h, m): (u32, u32)) -> SimTime {
    let dt = NaiveDateTime::new(day, chrono::NaiveTime::from_hms_opt(h, m, 0).unwrap_or_else(|| unreachable!()));
    SimTime::new(dt)
}

fn clamp_u32(v: i64, lo: u32, hi: u32) -> u32 {
    v.clamp(i64::from(lo), i64::from(hi)) as u32
}

/// Approximate a normal sample via Box-Muller; the source's
/// `random.gauss(mean, stddev)` has no stdlib equivalent in `rand` and
/// this crate does not carry `rand_distr` for one call site.
fn gauss(rng: &mut StdRng, mean: f64, stddev: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    let z0 = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + z0 * stddev
}

fn sample_qty(cfg: &SyntheticDayConfig, rng: &mut StdRng) -> u64 {
    let r: f64 = rng.gen_range(0.0..1.0);
    if r < cfg.p_small {
        rng.gen_range(cfg.qty_small.0..=cfg.qty_small.1)
    } else if r > 1.0 - cfg.p_large {
        rng.gen_range(cfg.qty_large.0..=cfg.qty_large.1)
    } else {
        rng.gen_range(cfg.qty_medium.0..=cfg.qty_medium.1)
    }
}

fn sample_due_date(base_day: NaiveDate, cfg: &SyntheticDayConfig, rng: &mut StdRng) -> NaiveDate {
    let add_days = if rng.gen_range(0.0..1.0) < cfg.p_tight_due {
        *[0i64, 0, 1].choose(rng).unwrap_or(&0)
    } else {
        rng.gen_range(cfg.due_days_min..=cfg.due_days_max)
    };
    base_day + ChronoDuration::days(add_days)
}

fn sample_priority(due_day: NaiveDate, base_day: NaiveDate, rng: &mut StdRng) -> i32 {
    let delta = (due_day - base_day).num_days();
    match delta {
        d if d <= 0 => 5,
        1 => *[4, 5].choose(rng).unwrap_or(&5),
        2 => *[3, 4].choose(rng).unwrap_or(&4),
        _ => *[1, 2, 3].choose(rng).unwrap_or(&2),
    }
}

fn working_days(cfg: &SyntheticDayConfig) -> Vec<NaiveDate> {
    (0..cfg.days).map(|d| cfg.start_date + ChronoDuration::days(i64::from(d))).filter(|d| !is_weekend(*d)).collect()
}

fn generate_work_orders(cfg: &SyntheticDayConfig, rng: &mut StdRng) -> Vec<WorkOrder> {
    let mut orders = Vec::new();
    let mut counter = 1u32;

    for day in working_days(cfg) {
        let n = clamp_u32(
            gauss(rng, cfg.of_per_day_mean, 3.0).round() as i64,
            cfg.of_per_day_min,
            cfg.of_per_day_max,
        );

        for _ in 0..n {
            let Some(format) = cfg.formats.choose(rng) else { continue };
            let qty = sample_qty(cfg, rng);
            let nominal_rate = rng.gen_range(cfg.nominal_rate_min..=cfg.nominal_rate_max);
            let nominal_duration_min = (((qty as f64 / nominal_rate as f64) * 60.0) as u32).max(5);

            let due_day = sample_due_date(day, cfg, rng);
            let priority = sample_priority(due_day, day, rng);

            orders.push(WorkOrder {
                of_id: format!("OF{counter:05}").into(),
                product: format!("PRODUCT_{format}"),
                format: format.as_str().into(),
                created_at: at(day, (7, 30)),
                due_date: at(due_day, cfg.shift_end),
                priority,
                qty,
                nominal_rate_u_per_h: nominal_rate,
                nominal_duration_min,
            });
            counter += 1;
        }
    }

    orders
}

fn shift_events(cfg: &SyntheticDayConfig) -> Vec<Event> {
    let mut events = Vec::new();
    for day in working_days(cfg) {
        events.push(Event::new(at(day, cfg.shift_start), EventType::ShiftStart, ""));
        events.push(Event::new(at(day, cfg.lunch_start), EventType::ShiftStop, "LUNCH"));
        events.push(Event::new(at(day, cfg.lunch_end), EventType::ShiftStart, "AFTER_LUNCH"));
        events.push(Event::new(at(day, cfg.shift_end), EventType::ShiftStop, "END_OF_SHIFT"));
    }
    events
}

fn breakdown_events(cfg: &SyntheticDayConfig, rng: &mut StdRng) -> Vec<Event> {
    let mut events = Vec::new();
    let days = working_days(cfg);

    for (d, &day) in days.iter().enumerate() {
        let micro_count = rng.gen_range(cfg.micro_breakdowns_per_day_range.0..=cfg.micro_breakdowns_per_day_range.1);
        for _ in 0..micro_count {
            let start = at(day, cfg.shift_start).add_minutes(rng.gen_range(20..=420));
            let dur = i64::from(rng.gen_range(cfg.micro_breakdown_duration_min.0..=cfg.micro_breakdown_duration_min.1));
            let end = start.add_minutes(dur);
            events.push(Event::new(start, EventType::BreakdownStart, "MICRO"));
            events.push(Event::new(end, EventType::BreakdownEnd, "MICRO"));
        }

        if cfg.major_breakdown_every_n_days > 0 && (d as u32) % cfg.major_breakdown_every_n_days == 0 {
            let start = at(day, cfg.shift_start).add_minutes(rng.gen_range(60..=330));
            let dur = i64::from(rng.gen_range(cfg.major_breakdown_duration_min.0..=cfg.major_breakdown_duration_min.1));
            let end_limit = at(day, cfg.shift_end).add_minutes(-5);
            let end = if start.add_minutes(dur) > end_limit { end_limit } else { start.add_minutes(dur) };
            events.push(Event::new(start, EventType::BreakdownStart, "MAJOR"));
            events.push(Event::new(end, EventType::BreakdownEnd, "MAJOR"));

            if rng.gen_range(0.0..1.0) < 0.25 {
                let mut c_start = end.add_minutes(rng.gen_range(10..=40));
                for _ in 0..2 {
                    let c_dur = i64::from(rng.gen_range(cfg.micro_breakdown_duration_min.0..=cfg.micro_breakdown_duration_min.1));
                    let c_end = c_start.add_minutes(c_dur);
                    if c_end <= at(day, cfg.shift_end) {
                        events.push(Event::new(c_start, EventType::BreakdownStart, "CASCADE"));
                        events.push(Event::new(c_end, EventType::BreakdownEnd, "CASCADE"));
                    }
                    c_start = c_end.add_minutes(rng.gen_range(10..=30));
                }
            }
        }
    }

    events
}

fn speed_drift_events(cfg: &SyntheticDayConfig, rng: &mut StdRng) -> Vec<Event> {
    let mut events = Vec::new();
    for day in working_days(cfg) {
        if rng.gen_range(0.0..1.0) < cfg.speed_drift_probability_per_day {
            let start = at(day, cfg.shift_start).add_minutes(rng.gen_range(30..=360));
            let dur = i64::from(rng.gen_range(cfg.speed_drift_duration_min.0..=cfg.speed_drift_duration_min.1));
            let factor = (rng.gen_range(cfg.speed_factor_range.0..cfg.speed_factor_range.1) * 100.0).round() / 100.0;
            let end = start.add_minutes(dur);
            events.push(Event::new(start, EventType::SpeedChange, format!("{factor}")));
            events.push(Event::new(end, EventType::SpeedChange, "1.0"));
        }
    }
    events
}

fn urgent_order_events(cfg: &SyntheticDayConfig, rng: &mut StdRng) -> Vec<Event> {
    let per_week = rng.gen_range(cfg.urgent_orders_per_week_range.0..=cfg.urgent_orders_per_week_range.1);
    let urgent_total = clamp_u32(i64::from(per_week) * 2, 4, 12) as usize;

    let days = working_days(cfg);
    let chosen: Vec<NaiveDate> =
        days.choose_multiple(rng, urgent_total.min(days.len())).copied().collect();

    let mut events = Vec::new();
    for (i, &day) in chosen.iter().enumerate() {
        let window_start = at(day, cfg.urgent_time_window.0);
        let window_end = at(day, cfg.urgent_time_window.1);
        let span = window_start.minutes_until(window_end).max(0);
        let t = window_start.add_minutes(rng.gen_range(0..=span));

        let format = cfg.formats.choose(rng).cloned().unwrap_or_else(|| "F1".to_string());
        let qty = rng.gen_range(3_000u64..=25_000u64);
        let nominal_rate = rng.gen_range(cfg.nominal_rate_min..=cfg.nominal_rate_max);
        let duration_min = (((qty as f64 / nominal_rate as f64) * 60.0) as u32).max(5);

        let due = if rng.gen_range(0.0..1.0) < cfg.urgent_due_same_day_prob {
            at(day, cfg.shift_end)
        } else {
            at(day + ChronoDuration::days(1), cfg.shift_end)
        };

        let of_id = format!("URG{:04}", i + 1);
        let payload = format!(
            "of_id={of_id};format={format};qty={qty};nominal_rate={nominal_rate};duration_min={duration_min};due={due};priority=5"
        );
        events.push(Event::new(t, EventType::UrgentOrder, payload));
    }

    events
}

/// Generate one synthetic pool of work orders plus the disturbance events
/// (shift boundaries, breakdowns, speed drifts, urgent insertions) that
/// play out over `cfg.days` starting `cfg.start_date`. Deterministic given
/// `seed`; events are returned sorted by timestamp, matching the CSV the
/// original script writes.
pub fn generate_day(cfg: &SyntheticDayConfig, seed: u64) -> (Vec<WorkOrder>, Vec<Event>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let orders = generate_work_orders(cfg, &mut rng);

    let mut events = Vec::new();
    events.extend(shift_events(cfg));
    events.extend(breakdown_events(cfg, &mut rng));
    events.extend(speed_drift_events(cfg, &mut rng));
    events.extend(urgent_order_events(cfg, &mut rng));
    events.sort_by_key(|e| e.timestamp);

    (orders, events)
}

/// Generate a setup-cost table for `cfg.formats`: zero on the diagonal,
/// a small random cost between adjacent formats, a larger one further
/// apart — the same "closer formats share similar tooling" heuristic the
/// Python prototype encodes, with each ordered pair drawn independently
/// (so `A -> B` and `B -> A` need not match, matching the source).
pub fn generate_setup_matrix(cfg: &SyntheticDayConfig, seed: u64) -> SetupMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = SetupMatrix::new();

    for (i, from) in cfg.formats.iter().enumerate() {
        for (j, to) in cfg.formats.iter().enumerate() {
            let minutes = if from == to {
                cfg.setup_same
            } else if i.abs_diff(j) <= 1 {
                rng.gen_range(cfg.setup_close_range.0..=cfg.setup_close_range.1)
            } else {
                rng.gen_range(cfg.setup_far_range.0..=cfg.setup_far_range.1)
            };
            matrix.insert(from.as_str(), to.as_str(), minutes);
        }
    }

    matrix
}

#[cfg(test)]
#[path = "synthetic_tests.rs"]
mod tests;
