/*!
 * Rate-Monotonic Tests
 * Feasibility verdicts, hyperperiods and simulated traces
 */

use pretty_assertions::assert_eq;
use sched_lab::realtime::{
    analyze, hyperperiod, is_schedulable, parse_task_list, simulate, RateMonotonic, RmsVerdict,
};
use sched_lab::{SimulatorConfig, ValidationError};

#[test]
fn test_classic_pair_end_to_end() {
    let tasks = parse_task_list("5,2;10,3").unwrap();
    let report = RateMonotonic::run(&tasks, &SimulatorConfig::default()).unwrap();

    assert_eq!(report.verdict, RmsVerdict::Schedulable);
    assert!((report.feasibility.utilization - 0.7).abs() < 1e-12);
    assert!((report.feasibility.bound - 0.828_427).abs() < 1e-6);
    assert_eq!(report.hyperperiod, Some(10));
    assert_eq!(report.slot_count(), 10);
    assert!(report.deadline_misses.is_empty());

    let labels: Vec<&str> = report
        .timeline
        .as_ref()
        .unwrap()
        .iter()
        .map(|e| e.slot.label())
        .collect();
    assert_eq!(
        labels,
        vec!["T0", "T0", "T1", "T1", "T1", "T0", "T0", "IDLE", "IDLE", "IDLE"]
    );
}

#[test]
fn test_three_task_set() {
    let tasks = parse_task_list("4,1;5,1;20,2").unwrap();
    // U = 0.25 + 0.2 + 0.1 = 0.55
    assert!(is_schedulable(&tasks).unwrap());
    assert_eq!(hyperperiod(&tasks).unwrap(), 20);

    let sim = simulate(&tasks, 20).unwrap();
    assert_eq!(sim.timeline.len(), 20);
    assert!(sim.meets_all_deadlines());
    let busy: u64 = sim.timeline.total_busy_time();
    assert_eq!(busy, 5 + 4 + 2);
}

#[test]
fn test_bound_exceeded_is_a_warning_not_an_error() {
    // U = 1.0 on two tasks, above 0.828 though EDF could run it
    let tasks = parse_task_list("2,1;4,2").unwrap();
    let feasibility = analyze(&tasks).unwrap();
    assert!(!feasibility.schedulable);

    let report = RateMonotonic::run(&tasks, &SimulatorConfig::default()).unwrap();
    assert_eq!(report.verdict, RmsVerdict::BoundExceeded);
    assert!(report.timeline.is_none());
}

#[test]
fn test_simulation_beyond_bound_may_still_meet_deadlines() {
    // Harmonic periods: schedulable at U = 1.0 even though the bound rejects it
    let tasks = parse_task_list("2,1;4,2").unwrap();
    let sim = simulate(&tasks, 4).unwrap();
    assert!(sim.meets_all_deadlines());
    assert_eq!(sim.timeline.total_busy_time(), 4);
}

#[test]
fn test_invalid_task_input() {
    assert_eq!(
        parse_task_list("5,0").unwrap_err(),
        ValidationError::NonPositiveWcet { task: 0, wcet: 0 }
    );
    assert!(matches!(
        parse_task_list("5;10,3"),
        Err(ValidationError::Malformed(_))
    ));
    assert_eq!(simulate(&[], 10).unwrap_err(), ValidationError::EmptyTaskSet);
}
