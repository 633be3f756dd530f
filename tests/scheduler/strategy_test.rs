/*!
 * Strategy Tests
 * Hand-computed traces for every scheduling policy through the Simulator
 */

use pretty_assertions::assert_eq;
use sched_lab::scheduler::strategy_for;
use sched_lab::{
    Process, RunReport, SchedulingPolicy, Simulator, SimulatorConfig, Slot, Time, TimeQuantum,
    Timeline, ValidationError,
};

fn spans(timeline: &Timeline) -> Vec<(String, Time, Time)> {
    timeline
        .iter()
        .map(|e| (e.slot.label().to_string(), e.start, e.end))
        .collect()
}

fn expected(rows: &[(&str, Time, Time)]) -> Vec<(String, Time, Time)> {
    rows.iter()
        .map(|&(label, start, end)| (label.to_string(), start, end))
        .collect()
}

fn run(policy: SchedulingPolicy, processes: &mut [Process], quantum: Option<Time>) -> RunReport {
    let quantum = quantum.map(|q| TimeQuantum::new(q).unwrap());
    Simulator::default().run(policy, processes, quantum).unwrap()
}

#[test]
fn test_fcfs_two_processes() {
    let mut processes = vec![
        Process::new("P0", 0, 5, 0).unwrap(),
        Process::new("P1", 1, 3, 0).unwrap(),
    ];
    let report = run(SchedulingPolicy::Fcfs, &mut processes, None);

    assert_eq!(spans(&report.timeline), expected(&[("P0", 0, 5), ("P1", 5, 8)]));
    assert_eq!(report.processes[0].waiting_time, 0);
    assert_eq!(report.processes[1].waiting_time, 4);
    assert_eq!(report.averages.waiting, 2.0);
}

#[test]
fn test_sjf_picks_shortest_at_each_decision() {
    let mut processes = vec![
        Process::new("P0", 0, 7, 0).unwrap(),
        Process::new("P1", 2, 4, 0).unwrap(),
        Process::new("P2", 4, 1, 0).unwrap(),
        Process::new("P3", 5, 4, 0).unwrap(),
    ];
    let report = run(SchedulingPolicy::Sjf, &mut processes, None);

    assert_eq!(
        spans(&report.timeline),
        expected(&[("P0", 0, 7), ("P2", 7, 8), ("P1", 8, 12), ("P3", 12, 16)])
    );
    let waits: Vec<Time> = report.processes.iter().map(|m| m.waiting_time).collect();
    assert_eq!(waits, vec![0, 6, 3, 7]);
    assert_eq!(report.averages.waiting, 4.0);
}

#[test]
fn test_srtf_classic_trace() {
    let mut processes = vec![
        Process::new("P0", 0, 8, 0).unwrap(),
        Process::new("P1", 1, 4, 0).unwrap(),
        Process::new("P2", 2, 9, 0).unwrap(),
        Process::new("P3", 3, 5, 0).unwrap(),
    ];
    let report = run(SchedulingPolicy::Srtf, &mut processes, None);

    assert_eq!(
        spans(&report.timeline),
        expected(&[
            ("P0", 0, 1),
            ("P1", 1, 5),
            ("P3", 5, 10),
            ("P0", 10, 17),
            ("P2", 17, 26)
        ])
    );

    let turnaround: Vec<Time> = report.processes.iter().map(|m| m.turnaround_time).collect();
    assert_eq!(turnaround, vec![17, 4, 24, 7]);
    let waiting: Vec<Time> = report.processes.iter().map(|m| m.waiting_time).collect();
    assert_eq!(waiting, vec![9, 0, 15, 2]);
    assert_eq!(report.averages.waiting, 6.5);
}

#[test]
fn test_round_robin_quantum_two() {
    let mut processes = vec![
        Process::new("P0", 0, 5, 0).unwrap(),
        Process::new("P1", 1, 4, 0).unwrap(),
        Process::new("P2", 2, 2, 0).unwrap(),
    ];
    let report = run(SchedulingPolicy::RoundRobin, &mut processes, Some(2));

    assert_eq!(
        spans(&report.timeline),
        expected(&[
            ("P0", 0, 2),
            ("P1", 2, 4),
            ("P2", 4, 6),
            ("P0", 6, 8),
            ("P1", 8, 10),
            ("P0", 10, 11)
        ])
    );
    assert_eq!(report.quantum, Some(2));
}

#[test]
fn test_priority_preemptive() {
    let mut processes = vec![
        Process::new("P0", 0, 4, 2).unwrap(),
        Process::new("P1", 1, 3, 1).unwrap(),
        Process::new("P2", 2, 2, 3).unwrap(),
    ];
    let report = run(SchedulingPolicy::PriorityPreemptive, &mut processes, None);

    assert_eq!(
        spans(&report.timeline),
        expected(&[("P0", 0, 1), ("P1", 1, 4), ("P0", 4, 7), ("P2", 7, 9)])
    );
    // P0 first ran at 0 even though it was preempted later
    assert_eq!(report.processes[0].response_time, 0);
}

#[test]
fn test_priority_non_preemptive() {
    let mut processes = vec![
        Process::new("P0", 0, 4, 2).unwrap(),
        Process::new("P1", 1, 3, 1).unwrap(),
        Process::new("P2", 2, 2, 0).unwrap(),
    ];
    let report = run(SchedulingPolicy::PriorityNonPreemptive, &mut processes, None);

    assert_eq!(
        spans(&report.timeline),
        expected(&[("P0", 0, 4), ("P2", 4, 6), ("P1", 6, 9)])
    );
}

#[test]
fn test_single_process_every_policy() {
    for policy in SchedulingPolicy::ALL {
        let mut processes = vec![Process::new("only", 2, 3, 0).unwrap()];
        let report = run(policy, &mut processes, None);
        let row = &report.processes[0];
        assert_eq!(row.waiting_time, 0, "{}", policy);
        assert_eq!(row.response_time, 0, "{}", policy);
        assert_eq!(row.completion_time, 5, "{}", policy);
    }
}

#[test]
fn test_idle_gap_filled_on_request() {
    let mut processes = vec![
        Process::new("A", 0, 2, 0).unwrap(),
        Process::new("B", 6, 1, 0).unwrap(),
    ];

    let sparse = run(SchedulingPolicy::Fcfs, &mut processes, None);
    assert!(sparse.timeline.iter().all(|e| !e.slot.is_idle()));

    let report = Simulator::new(SimulatorConfig::contiguous())
        .run(SchedulingPolicy::Fcfs, &mut processes, None)
        .unwrap();
    assert_eq!(
        spans(&report.timeline),
        expected(&[("A", 0, 2), ("IDLE", 2, 6), ("B", 6, 7)])
    );
    assert_eq!(report.timeline.entries()[1].slot, Slot::Idle);
}

#[test]
fn test_same_set_rescheduled_under_another_policy() {
    let mut processes = vec![
        Process::new("P0", 0, 8, 0).unwrap(),
        Process::new("P1", 1, 4, 0).unwrap(),
    ];
    let sim = Simulator::default();

    let fcfs = sim.run(SchedulingPolicy::Fcfs, &mut processes, None).unwrap();
    let srtf = sim.run(SchedulingPolicy::Srtf, &mut processes, None).unwrap();

    assert_eq!(fcfs.processes[1].completion_time, 12);
    assert_eq!(srtf.processes[1].completion_time, 5);
}

#[test]
fn test_strategy_requires_quantum_directly() {
    let mut processes = vec![Process::new("P0", 0, 1, 0).unwrap()];
    let err = strategy_for(SchedulingPolicy::RoundRobin)
        .schedule(&mut processes, None)
        .unwrap_err();
    assert_eq!(err, ValidationError::MissingQuantum);
}

#[test]
fn test_empty_set_rejected() {
    let err = Simulator::default()
        .run(SchedulingPolicy::Fcfs, &mut [], None)
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyProcessSet);
}
