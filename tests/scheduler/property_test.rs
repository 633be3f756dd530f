/*!
 * Scheduler Property Tests
 * Conservation, reproducibility and preemption order over generated
 * process sets
 */

use proptest::prelude::*;
use sched_lab::{
    Process, SchedulingPolicy, Simulator, SimulatorConfig, Time, TimeQuantum, Timeline,
};

fn process_set() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0u64..30, 1u64..12, 0u32..6), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Process::new(format!("P{}", i), arrival, burst, priority).unwrap()
            })
            .collect()
    })
}

fn policy() -> impl Strategy<Value = SchedulingPolicy> {
    (0..SchedulingPolicy::ALL.len()).prop_map(|i| SchedulingPolicy::ALL[i])
}

/// Owner of each time unit in `[0, end)`, by input index
fn unit_owners(processes: &[Process], timeline: &Timeline) -> Vec<Option<usize>> {
    let mut owners = vec![None; timeline.end_time() as usize];
    for entry in timeline {
        let Some(pid) = entry.slot.pid() else {
            continue;
        };
        let index = processes.iter().position(|p| p.pid() == pid);
        for t in entry.start..entry.end {
            owners[t as usize] = index;
        }
    }
    owners
}

proptest! {
    #[test]
    fn prop_every_burst_is_fully_served(
        mut processes in process_set(),
        policy in policy(),
        quantum in 1u64..6,
    ) {
        let quantum = TimeQuantum::new(quantum).unwrap();
        let report = Simulator::default()
            .run(policy, &mut processes, Some(quantum))
            .unwrap();

        let remaining: Time = processes.iter().map(Process::remaining_time).sum();
        prop_assert_eq!(remaining, 0);

        for process in &processes {
            prop_assert_eq!(report.timeline.busy_time(process.pid()), process.burst_time());
        }

        for row in &report.processes {
            prop_assert!(row.start_time >= row.arrival_time);
            prop_assert_eq!(row.turnaround_time, row.waiting_time + row.burst_time);
            prop_assert!(row.response_time <= row.waiting_time);
        }
    }

    #[test]
    fn prop_intervals_never_overlap(
        mut processes in process_set(),
        policy in policy(),
    ) {
        let report = Simulator::new(SimulatorConfig::contiguous())
            .run(policy, &mut processes, None)
            .unwrap();

        let mut cursor = 0;
        for entry in &report.timeline {
            // Contiguous from zero once idle gaps are filled
            prop_assert_eq!(entry.start, cursor);
            prop_assert!(entry.end > entry.start);
            cursor = entry.end;
        }
        let last_arrival = processes.iter().map(Process::arrival_time).max().unwrap_or(0);
        prop_assert!(cursor > last_arrival);
    }

    #[test]
    fn prop_rerun_is_identical(
        mut processes in process_set(),
        policy in policy(),
    ) {
        let sim = Simulator::default();
        let first = sim.run(policy, &mut processes, None).unwrap();
        let second = sim.run(policy, &mut processes, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_preemptive_owner_has_smallest_key(
        mut processes in process_set(),
        by_priority in any::<bool>(),
    ) {
        let policy = if by_priority {
            SchedulingPolicy::PriorityPreemptive
        } else {
            SchedulingPolicy::Srtf
        };
        let report = Simulator::default().run(policy, &mut processes, None).unwrap();
        let owners = unit_owners(&processes, &report.timeline);

        let mut remaining: Vec<Time> = processes.iter().map(Process::burst_time).collect();
        let key = |index: usize, remaining: &[Time]| -> Time {
            if by_priority {
                Time::from(processes[index].priority())
            } else {
                remaining[index]
            }
        };

        for (t, owner) in owners.iter().enumerate() {
            let t = t as Time;
            let ready: Vec<usize> = (0..processes.len())
                .filter(|&i| processes[i].arrival_time() <= t && remaining[i] > 0)
                .collect();

            match *owner {
                None => prop_assert!(ready.is_empty(), "cpu idle at {} with work ready", t),
                Some(owner) => {
                    prop_assert!(ready.contains(&owner));
                    // Ties never preempt, so the owner only needs a key no larger than any other
                    let owner_key = key(owner, &remaining);
                    for &other in &ready {
                        prop_assert!(
                            owner_key <= key(other, &remaining),
                            "{} ran {} at {} over {}",
                            policy,
                            processes[owner].pid(),
                            t,
                            processes[other].pid()
                        );
                    }
                    remaining[owner] -= 1;
                }
            }
        }
        prop_assert!(remaining.iter().all(|&r| r == 0));
    }
}
