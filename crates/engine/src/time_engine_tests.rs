use super::*;
use lineplan_core::state::CurrentJob;
use lineplan_core::{SchedulerConfig, SetupMatrix, SimTime, WorkOrder};

fn state_at(hhmm: &str) -> EngineState {
    EngineState::new(
        SimTime::parse(&format!("2026-01-05T{hhmm}")).unwrap(),
        SchedulerConfig::default(),
        SetupMatrix::new(),
    )
}

fn job(nominal_duration_min: u32) -> CurrentJob {
    CurrentJob {
        work_order: WorkOrder::builder().of_id("A").nominal_duration_min(nominal_duration_min).build(),
        remaining_setup_min: 0,
        remaining_work_nominal_min: nominal_duration_min,
        work_acc: 0.0,
    }
}

#[test]
fn advance_without_running_only_accrues_stopped_minutes() {
    let mut st = state_at("08:00");
    advance_to(&mut st, SimTime::parse("2026-01-05T09:00").unwrap());
    assert_eq!(st.kpi.stopped_min, 60);
    assert_eq!(st.kpi.total(), 60);
}

#[test]
fn advance_while_down_accrues_downtime_even_if_running() {
    let mut st = state_at("08:00");
    st.is_running = true;
    st.is_down = true;
    advance_to(&mut st, SimTime::parse("2026-01-05T08:30").unwrap());
    assert_eq!(st.kpi.downtime_min, 30);
    assert_eq!(st.kpi.producing_min, 0);
}

#[test]
fn idle_when_running_with_no_job() {
    let mut st = state_at("08:00");
    st.is_running = true;
    advance_to(&mut st, SimTime::parse("2026-01-05T08:15").unwrap());
    assert_eq!(st.kpi.idle_min, 15);
}

#[test]
fn job_completes_exactly_after_nominal_duration_at_unit_speed() {
    let mut st = state_at("08:00");
    st.is_running = true;
    st.current_job = Some(job(60));
    advance_to(&mut st, SimTime::parse("2026-01-05T09:00").unwrap());
    assert!(st.current_job.is_none());
    assert_eq!(st.completed.len(), 1);
    assert_eq!(st.completed[0].finished_at.to_string(), "2026-01-05T09:00");
    assert_eq!(st.kpi.producing_min, 60);
}

#[test]
fn setup_phase_precedes_work_and_consumes_whole_minutes() {
    let mut st = state_at("08:00");
    st.is_running = true;
    st.current_job = Some(CurrentJob {
        work_order: WorkOrder::builder().of_id("A").nominal_duration_min(10).build(),
        remaining_setup_min: 5,
        remaining_work_nominal_min: 10,
        work_acc: 0.0,
    });
    advance_to(&mut st, SimTime::parse("2026-01-05T08:05").unwrap());
    let job = st.current_job.as_ref().unwrap();
    assert_eq!(job.remaining_setup_min, 0);
    assert_eq!(job.remaining_work_nominal_min, 10);
}

#[test]
fn fractional_speed_progresses_losslessly() {
    let mut st = state_at("08:00");
    st.is_running = true;
    st.speed_factor = 0.5;
    st.current_job = Some(job(10));
    // 10 nominal minutes at 0.5x speed takes 20 real minutes.
    advance_to(&mut st, SimTime::parse("2026-01-05T08:19").unwrap());
    assert!(st.current_job.is_some());
    advance_to(&mut st, SimTime::parse("2026-01-05T08:20").unwrap());
    assert!(st.current_job.is_none());
}

#[test]
fn tiny_positive_speed_never_divides_by_zero_and_still_progresses() {
    let mut st = state_at("08:00");
    st.is_running = true;
    st.speed_factor = 0.01;
    st.current_job = Some(job(1));
    advance_to(&mut st, SimTime::parse("2026-01-05T09:40").unwrap());
    assert!(st.current_job.is_none());
}

#[test]
fn target_before_now_jumps_without_stepping() {
    let mut st = state_at("09:00");
    advance_to(&mut st, SimTime::parse("2026-01-05T08:00").unwrap());
    assert_eq!(st.now.to_string(), "2026-01-05T08:00");
    assert_eq!(st.kpi.total(), 0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// §8: "sum(downtime_min, stopped_min, idle_min, producing_min) =
        /// minutes elapsed since construction", across arbitrary
        /// running/down/job-present toggles and step sizes.
        #[test]
        fn kpi_counters_partition_elapsed_minutes(
            steps in prop::collection::vec(
                (any::<bool>(), any::<bool>(), any::<bool>(), 0u32..90),
                0..20,
            ),
        ) {
            let mut st = state_at("00:00");
            let mut elapsed = 0i64;
            for (running, down, has_job, minutes) in steps {
                st.is_running = running;
                st.is_down = down;
                st.current_job = has_job.then(|| job(1_000_000));
                let target = st.now.add_minutes(i64::from(minutes));
                advance_to(&mut st, target);
                elapsed += i64::from(minutes);
            }
            prop_assert_eq!(st.kpi.total() as i64, elapsed);
        }
    }
}
