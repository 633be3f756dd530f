/*!
 * Rate-Monotonic Simulation
 *
 * Unit-stepped execution of periodic tasks under static priorities
 * (shorter period runs first, equal periods resolve to the lower task id).
 */

use super::analysis::{analyze, hyperperiod, Feasibility};
use super::task::PeriodicTask;
use crate::config::SimulatorConfig;
use crate::core::{ProcessId, Time, ValidationError, ValidationResult};
use crate::scheduler::Timeline;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A job that had not finished when its deadline arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeadlineMiss {
    pub task: usize,
    /// Deadline instant (next release, or the horizon)
    pub at: Time,
    /// Units still owed when the deadline passed
    pub remaining: Time,
}

/// Timeline and deadline misses of one simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub timeline: Timeline,
    pub deadline_misses: Vec<DeadlineMiss>,
}

impl Simulation {
    pub fn meets_all_deadlines(&self) -> bool {
        self.deadline_misses.is_empty()
    }
}

/// Per-task job state for one simulation
struct Job {
    label: ProcessId,
    remaining: Time,
    next_release: Time,
}

/// Simulate `horizon` units, one timeline entry per unit
pub fn simulate(tasks: &[PeriodicTask], horizon: Time) -> ValidationResult<Simulation> {
    if tasks.is_empty() {
        return Err(ValidationError::EmptyTaskSet);
    }

    let mut jobs: Vec<Job> = tasks
        .iter()
        .map(|task| Job {
            label: task.label(),
            remaining: 0,
            next_release: 0,
        })
        .collect();

    let capacity = usize::try_from(horizon).unwrap_or(usize::MAX).min(1 << 16);
    let mut timeline = Timeline::with_capacity(capacity);
    let mut deadline_misses = Vec::new();

    for t in 0..horizon {
        for (task, job) in tasks.iter().zip(jobs.iter_mut()) {
            if t == job.next_release {
                if job.remaining > 0 {
                    warn!(task = task.id(), at = t, remaining = job.remaining, "Deadline missed");
                    deadline_misses.push(DeadlineMiss {
                        task: task.id(),
                        at: t,
                        remaining: job.remaining,
                    });
                }
                job.remaining = task.wcet();
            }
        }

        // Strict comparison keeps the earliest index on equal periods
        let mut current: Option<usize> = None;
        for (i, (task, job)) in tasks.iter().zip(&jobs).enumerate() {
            if job.remaining == 0 {
                continue;
            }
            match current {
                Some(c) if tasks[c].period() <= task.period() => {}
                _ => current = Some(i),
            }
        }

        match current {
            Some(i) => {
                jobs[i].remaining -= 1;
                timeline.push_process(&jobs[i].label, t, t + 1);
            }
            None => timeline.push_idle(t, t + 1),
        }

        for (task, job) in tasks.iter().zip(jobs.iter_mut()) {
            if t + 1 == job.next_release + task.period() {
                job.next_release += task.period();
            }
        }
    }

    for (task, job) in tasks.iter().zip(&jobs) {
        if job.remaining > 0 && job.next_release == horizon {
            warn!(task = task.id(), at = horizon, remaining = job.remaining, "Deadline missed");
            deadline_misses.push(DeadlineMiss {
                task: task.id(),
                at: horizon,
                remaining: job.remaining,
            });
        }
    }

    debug!(slots = timeline.len(), misses = deadline_misses.len(), "simulation finished");

    Ok(Simulation {
        timeline,
        deadline_misses,
    })
}

/// Verdict of a rate-monotonic run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RmsVerdict {
    /// Utilization is within the bound; the hyperperiod was simulated
    Schedulable,
    /// Utilization exceeds the bound; nothing was simulated
    BoundExceeded,
}

impl RmsVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Schedulable => "Utilization test passed",
            Self::BoundExceeded => {
                "Utilization bound exceeded: the bound is sufficient only, \
                 so the set is rejected without proof of infeasibility"
            }
        }
    }
}

/// Full result of [`RateMonotonic::run`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RmsReport {
    pub feasibility: Feasibility,
    pub verdict: RmsVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyperperiod: Option<Time>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
    pub deadline_misses: Vec<DeadlineMiss>,
}

impl RmsReport {
    /// Number of one-unit slots simulated
    pub fn slot_count(&self) -> usize {
        self.timeline.as_ref().map_or(0, Timeline::len)
    }
}

/// Rate-monotonic feasibility test followed by a hyperperiod simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct RateMonotonic;

impl RateMonotonic {
    #[instrument(skip(tasks, config), fields(count = tasks.len()))]
    pub fn run(tasks: &[PeriodicTask], config: &SimulatorConfig) -> ValidationResult<RmsReport> {
        let feasibility = analyze(tasks)?;
        info!(
            utilization = feasibility.utilization,
            bound = feasibility.bound,
            "Utilization test"
        );

        if !feasibility.schedulable {
            warn!(
                utilization = feasibility.utilization,
                bound = feasibility.bound,
                "{}",
                RmsVerdict::BoundExceeded.message()
            );
            return Ok(RmsReport {
                feasibility,
                verdict: RmsVerdict::BoundExceeded,
                hyperperiod: None,
                timeline: None,
                deadline_misses: Vec::new(),
            });
        }

        let hyperperiod = hyperperiod(tasks)?;
        if hyperperiod > config.max_horizon {
            return Err(ValidationError::HorizonExceeded {
                horizon: hyperperiod,
                limit: config.max_horizon,
            });
        }

        let simulation = simulate(tasks, hyperperiod)?;
        info!(hyperperiod, slots = simulation.timeline.len(), "RMS simulation complete");

        Ok(RmsReport {
            feasibility,
            verdict: RmsVerdict::Schedulable,
            hyperperiod: Some(hyperperiod),
            timeline: Some(simulation.timeline),
            deadline_misses: simulation.deadline_misses,
        })
    }
}
