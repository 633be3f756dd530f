/*!
 * Round-Robin
 *
 * FIFO ready queue with a fixed quantum. Processes that arrive while a slice
 * runs (up to and including the slice end) are enqueued before the
 * preempted process goes to the back of the queue.
 */

use super::arrival_order;
use crate::core::{Time, ValidationError, ValidationResult};
use crate::process::{worst_case_horizon, Process};
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Strategy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};
use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl Strategy for RoundRobin {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn schedule(
        &self,
        processes: &mut [Process],
        quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline> {
        let quantum = quantum.ok_or(ValidationError::MissingQuantum)?.get();
        worst_case_horizon(processes)?;

        let order = arrival_order(processes);
        let mut timeline = Timeline::new();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut next = 0;
        let mut now: Time = 0;

        loop {
            enqueue_arrivals(processes, &order, &mut next, now, &mut queue);

            let Some(current) = queue.pop_front() else {
                match order.get(next) {
                    Some(&index) => {
                        now = processes[index].arrival_time();
                        trace!(now, "ready queue empty, clock advanced to next arrival");
                        continue;
                    }
                    None => break,
                }
            };

            let start = now;
            let slice = {
                let process = &mut processes[current];
                process.mark_started(start);
                let slice = quantum.min(process.remaining_time);
                process.remaining_time -= slice;
                slice
            };
            now += slice;

            // Arrivals during the slice go ahead of the preempted process
            enqueue_arrivals(processes, &order, &mut next, now, &mut queue);

            let process = &mut processes[current];
            timeline.push_process(process.pid(), start, now);
            if process.remaining_time > 0 {
                queue.push_back(current);
            } else {
                process.complete(now);
            }
        }

        Ok(timeline)
    }
}

fn enqueue_arrivals(
    processes: &[Process],
    order: &[usize],
    next: &mut usize,
    now: Time,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&index) = order.get(*next) {
        if processes[index].arrival_time() > now {
            break;
        }
        queue.push_back(index);
        *next += 1;
    }
}
