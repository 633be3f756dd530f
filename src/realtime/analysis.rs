/*!
 * Schedulability Analysis
 *
 * Liu & Layland utilization bound for rate-monotonic priorities:
 * `U = Σ wcet_i / period_i <= n · (2^(1/n) − 1)`.
 * The bound is sufficient, not necessary. A set above it may still meet
 * every deadline, but is rejected here without simulating.
 */

use super::task::PeriodicTask;
use crate::core::{Time, ValidationError, ValidationResult};
use serde::Serialize;

/// Outcome of the utilization-bound test
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feasibility {
    pub utilization: f64,
    pub bound: f64,
    pub task_count: usize,
    pub schedulable: bool,
}

/// Total utilization `Σ wcet / period`
pub fn utilization(tasks: &[PeriodicTask]) -> f64 {
    tasks.iter().map(PeriodicTask::utilization).sum()
}

/// Liu & Layland bound for `n` tasks (`0.0` for no tasks)
pub fn liu_layland_bound(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    n * (2.0_f64.powf(1.0 / n) - 1.0)
}

/// Run the utilization-bound test
pub fn analyze(tasks: &[PeriodicTask]) -> ValidationResult<Feasibility> {
    if tasks.is_empty() {
        return Err(ValidationError::EmptyTaskSet);
    }

    let utilization = utilization(tasks);
    let bound = liu_layland_bound(tasks.len());
    Ok(Feasibility {
        utilization,
        bound,
        task_count: tasks.len(),
        schedulable: utilization <= bound,
    })
}

pub fn is_schedulable(tasks: &[PeriodicTask]) -> ValidationResult<bool> {
    analyze(tasks).map(|f| f.schedulable)
}

/// Least common multiple of all periods
pub fn hyperperiod(tasks: &[PeriodicTask]) -> ValidationResult<Time> {
    let (first, rest) = tasks.split_first().ok_or(ValidationError::EmptyTaskSet)?;
    rest.iter().try_fold(first.period(), |acc, task| {
        lcm(acc, task.period()).ok_or(ValidationError::HyperperiodOverflow)
    })
}

fn gcd(mut a: Time, mut b: Time) -> Time {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: Time, b: Time) -> Option<Time> {
    (a / gcd(a, b)).checked_mul(b)
}
