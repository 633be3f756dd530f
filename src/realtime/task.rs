/*!
 * Periodic Tasks
 * Validated period/WCET pairs and their text input format
 */

use crate::core::limits::TASK_LABEL_PREFIX;
use crate::core::{ProcessId, Time, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Periodic task with implicit deadline equal to its period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodicTask {
    id: usize,
    period: Time,
    wcet: Time,
}

impl PeriodicTask {
    pub fn new(id: usize, period: Time, wcet: Time) -> ValidationResult<Self> {
        if period == 0 {
            return Err(ValidationError::NonPositivePeriod { task: id, period: 0 });
        }
        if wcet == 0 {
            return Err(ValidationError::NonPositiveWcet { task: id, wcet: 0 });
        }
        Ok(Self { id, period, wcet })
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn period(&self) -> Time {
        self.period
    }

    #[inline]
    pub fn wcet(&self) -> Time {
        self.wcet
    }

    /// `wcet / period`
    pub fn utilization(&self) -> f64 {
        self.wcet as f64 / self.period as f64
    }

    /// Timeline label (`T0`, `T1`, ...)
    pub fn label(&self) -> ProcessId {
        ProcessId::from(format!("{}{}", TASK_LABEL_PREFIX, self.id))
    }
}

/// Unvalidated task as read from a workload file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub period: i64,
    pub wcet: i64,
}

impl TaskSpec {
    pub const fn new(period: i64, wcet: i64) -> Self {
        Self { period, wcet }
    }

    /// Validate into a task with the given id
    pub fn into_task(self, id: usize) -> ValidationResult<PeriodicTask> {
        if self.period <= 0 {
            return Err(ValidationError::NonPositivePeriod {
                task: id,
                period: self.period,
            });
        }
        if self.wcet <= 0 {
            return Err(ValidationError::NonPositiveWcet {
                task: id,
                wcet: self.wcet,
            });
        }
        PeriodicTask::new(id, self.period as Time, self.wcet as Time)
    }
}

/// Validate specs into tasks numbered by position
pub fn build_task_set(specs: &[TaskSpec]) -> ValidationResult<Vec<PeriodicTask>> {
    if specs.is_empty() {
        return Err(ValidationError::EmptyTaskSet);
    }
    specs
        .iter()
        .enumerate()
        .map(|(id, spec)| spec.into_task(id))
        .collect()
}

/// Parse `"period,wcet;period,wcet;..."`, e.g. `"5,2;10,3"`
pub fn parse_task_list(input: &str) -> ValidationResult<Vec<PeriodicTask>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyTaskSet);
    }

    let specs = input
        .split(';')
        .map(|pair| {
            let mut fields = pair.split(',').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(period), Some(wcet), None) => Ok(TaskSpec::new(
                    parse_field(period, "period")?,
                    parse_field(wcet, "wcet")?,
                )),
                _ => Err(ValidationError::Malformed(format!(
                    "expected 'period,wcet' but found '{}'",
                    pair.trim()
                ))),
            }
        })
        .collect::<ValidationResult<Vec<_>>>()?;

    build_task_set(&specs)
}

fn parse_field(field: &str, name: &str) -> ValidationResult<i64> {
    field
        .parse()
        .map_err(|_| ValidationError::Malformed(format!("{} '{}' is not an integer", name, field)))
}
