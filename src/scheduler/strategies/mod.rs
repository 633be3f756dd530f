/*!
 * Scheduling Strategies
 * The six disciplines plus the ready-set engines they share
 */

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use super::entry::ReadyEntry;
use super::timeline::Timeline;
use super::traits::Strategy;
use super::types::SchedulingPolicy;
use crate::core::{Time, ValidationResult};
use crate::process::{worst_case_horizon, Process};
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Strategy implementing `policy`
pub fn strategy_for(policy: SchedulingPolicy) -> &'static dyn Strategy {
    match policy {
        SchedulingPolicy::Fcfs => &Fcfs,
        SchedulingPolicy::Sjf => &Sjf,
        SchedulingPolicy::Srtf => &Srtf,
        SchedulingPolicy::RoundRobin => &RoundRobin,
        SchedulingPolicy::PriorityPreemptive => &PriorityPreemptive,
        SchedulingPolicy::PriorityNonPreemptive => &PriorityNonPreemptive,
    }
}

/// Indices of `processes` ordered by arrival (stable: ties keep input order)
pub(super) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time());
    order
}

/// Move every process that has arrived by `now` into the ready heap
fn admit<K>(
    processes: &[Process],
    order: &[usize],
    next: &mut usize,
    now: Time,
    ready: &mut BinaryHeap<ReadyEntry>,
    key: &K,
) where
    K: Fn(&Process) -> u64,
{
    while let Some(&index) = order.get(*next) {
        let process = &processes[index];
        if process.arrival_time() > now {
            break;
        }
        ready.push(ReadyEntry::new(key(process), process.arrival_time(), index));
        *next += 1;
    }
}

/// Run-to-completion engine: the ready process with the smallest key runs
/// until it finishes; the clock jumps to the next arrival when nothing is ready
pub(super) fn run_non_preemptive<K>(processes: &mut [Process], key: K) -> ValidationResult<Timeline>
where
    K: Fn(&Process) -> u64,
{
    worst_case_horizon(processes)?;

    let order = arrival_order(processes);
    let mut timeline = Timeline::with_capacity(processes.len());
    let mut ready = BinaryHeap::with_capacity(processes.len());
    let mut next = 0;
    let mut now: Time = 0;

    loop {
        admit(processes, &order, &mut next, now, &mut ready, &key);

        let Some(entry) = ready.pop() else {
            match order.get(next) {
                Some(&index) => {
                    now = processes[index].arrival_time();
                    trace!(now, "ready set empty, clock advanced to next arrival");
                    continue;
                }
                None => break,
            }
        };

        let process = &mut processes[entry.index];
        let start = now;
        process.mark_started(start);
        now += process.remaining_time;
        process.remaining_time = 0;
        process.complete(now);
        timeline.push_process(process.pid(), start, now);
    }

    Ok(timeline)
}

/// Unit-stepped preemptive engine
///
/// Each time unit, a ready process whose key is strictly smaller than the
/// running process's current key preempts it. The running interval is closed
/// and the preempted process returns to the ready set.
pub(super) fn run_preemptive<K>(processes: &mut [Process], key: K) -> ValidationResult<Timeline>
where
    K: Fn(&Process) -> u64,
{
    worst_case_horizon(processes)?;

    let n = processes.len();
    let order = arrival_order(processes);
    let mut timeline = Timeline::with_capacity(n);
    let mut ready = BinaryHeap::with_capacity(n);
    let mut next = 0;
    let mut completed = 0;
    let mut now: Time = 0;
    // (index, start of the current uninterrupted interval)
    let mut running: Option<(usize, Time)> = None;

    while completed < n {
        admit(processes, &order, &mut next, now, &mut ready, &key);

        if let Some((current, since)) = running {
            let current_key = key(&processes[current]);
            if ready.peek().is_some_and(|top| top.key < current_key) {
                let process = &processes[current];
                debug!(pid = %process.pid(), now, "preempted");
                timeline.push_process(process.pid(), since, now);
                ready.push(ReadyEntry::new(current_key, process.arrival_time(), current));
                running = None;
            }
        }

        let (current, since) = match running {
            Some(slot) => slot,
            None => match ready.pop() {
                Some(entry) => {
                    processes[entry.index].mark_started(now);
                    (entry.index, now)
                }
                None => match order.get(next) {
                    Some(&index) => {
                        now = processes[index].arrival_time();
                        trace!(now, "ready set empty, clock advanced to next arrival");
                        continue;
                    }
                    None => break,
                },
            },
        };

        let process = &mut processes[current];
        process.remaining_time -= 1;
        now += 1;

        if process.remaining_time == 0 {
            process.complete(now);
            timeline.push_process(process.pid(), since, now);
            completed += 1;
            running = None;
        } else {
            running = Some((current, since));
        }
    }

    Ok(timeline)
}
