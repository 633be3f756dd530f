/*!
 * Resource-Safety State
 * Validated available/max/allocation snapshot with its need matrix
 */

use crate::core::{ValidationError, ValidationResult};
use serde::Serialize;

/// Units per resource type
pub type Units = u32;

/// Immutable snapshot of a resource allocation
///
/// `need[i][j] = max[i][j] - allocation[i][j]` is derived and validated at
/// construction; the state holds no reference to any process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceState {
    available: Vec<Units>,
    max: Vec<Vec<Units>>,
    allocation: Vec<Vec<Units>>,
    need: Vec<Vec<Units>>,
}

impl ResourceState {
    pub fn new(
        available: Vec<Units>,
        max: Vec<Vec<Units>>,
        allocation: Vec<Vec<Units>>,
    ) -> ValidationResult<Self> {
        let need = compute_need(&available, &max, &allocation)?;
        Ok(Self {
            available,
            max,
            allocation,
            need,
        })
    }

    #[inline]
    pub fn process_count(&self) -> usize {
        self.max.len()
    }

    #[inline]
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn available(&self) -> &[Units] {
        &self.available
    }

    pub fn max(&self) -> &[Vec<Units>] {
        &self.max
    }

    pub fn allocation(&self) -> &[Vec<Units>] {
        &self.allocation
    }

    pub fn need(&self) -> &[Vec<Units>] {
        &self.need
    }

    /// Move `request` from available to `process`'s allocation
    ///
    /// Callers check `request <= need[process]` and `request <= available` first.
    pub(super) fn with_granted(&self, process: usize, request: &[Units]) -> Self {
        let mut next = self.clone();
        for (j, &units) in request.iter().enumerate() {
            next.available[j] -= units;
            next.allocation[process][j] += units;
            next.need[process][j] -= units;
        }
        next
    }
}

/// Derive the need matrix, checking every dimension and `max >= allocation`
pub fn compute_need(
    available: &[Units],
    max: &[Vec<Units>],
    allocation: &[Vec<Units>],
) -> ValidationResult<Vec<Vec<Units>>> {
    let resources = available.len();

    if max.len() != allocation.len() {
        return Err(ValidationError::DimensionMismatch(format!(
            "max has {} rows but allocation has {}",
            max.len(),
            allocation.len()
        )));
    }

    max.iter()
        .zip(allocation)
        .enumerate()
        .map(|(process, (max_row, alloc_row))| {
            if max_row.len() != resources || alloc_row.len() != resources {
                return Err(ValidationError::DimensionMismatch(format!(
                    "row P{} has max width {} and allocation width {}, expected {}",
                    process,
                    max_row.len(),
                    alloc_row.len(),
                    resources
                )));
            }

            max_row
                .iter()
                .zip(alloc_row)
                .enumerate()
                .map(|(resource, (&max, &allocation))| {
                    max.checked_sub(allocation)
                        .ok_or(ValidationError::NegativeNeed {
                            process,
                            resource,
                            max,
                            allocation,
                        })
                })
                .collect::<ValidationResult<Vec<Units>>>()
        })
        .collect()
}
