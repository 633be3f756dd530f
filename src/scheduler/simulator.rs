/*!
 * Simulator
 * Validated entry point for CPU scheduling runs
 */

use super::metrics::RunReport;
use super::strategies::strategy_for;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::config::SimulatorConfig;
use crate::core::{ValidationError, ValidationResult};
use crate::process::{validate_process_set, worst_case_horizon, Process};
use tracing::{debug, info, instrument};

/// Runs scheduling strategies over validated process sets
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Schedule `processes` under `policy`
    ///
    /// Validation happens before anything is mutated. On success every process
    /// has been reset and then completed by the strategy.
    #[instrument(skip(self, processes), fields(policy = policy.as_str(), count = processes.len()))]
    pub fn run(
        &self,
        policy: SchedulingPolicy,
        processes: &mut [Process],
        quantum: Option<TimeQuantum>,
    ) -> ValidationResult<RunReport> {
        validate_process_set(processes)?;

        let horizon = worst_case_horizon(processes)?;
        if horizon > self.config.max_horizon {
            return Err(ValidationError::HorizonExceeded {
                horizon,
                limit: self.config.max_horizon,
            });
        }

        let quantum = if policy.requires_quantum() {
            Some(match quantum {
                Some(q) => q,
                None => TimeQuantum::new(self.config.default_quantum)?,
            })
        } else {
            None
        };

        processes.iter_mut().for_each(Process::reset);

        let mut timeline = strategy_for(policy).schedule(processes, quantum)?;
        if self.config.fill_idle {
            timeline = timeline.with_idle_gaps();
        }

        debug!(entries = timeline.len(), "strategy finished");

        let report = RunReport::collect(policy, quantum.map(|q| q.get()), timeline, processes)
            .ok_or_else(|| {
                ValidationError::Malformed(format!(
                    "{} left processes unfinished",
                    policy.display_name()
                ))
            })?;

        info!(
            makespan = report.makespan(),
            avg_waiting = report.averages.waiting,
            avg_turnaround = report.averages.turnaround,
            "Scheduling run complete"
        );

        Ok(report)
    }

    /// Run every policy over its own copy of `processes`
    pub fn compare(
        &self,
        processes: &[Process],
        quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Vec<RunReport>> {
        SchedulingPolicy::ALL
            .iter()
            .map(|&policy| {
                let mut copy = processes.to_vec();
                self.run(policy, &mut copy, quantum)
            })
            .collect()
    }
}
