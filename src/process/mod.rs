/*!
 * Process Module
 * Process records and boundary validation
 */

pub mod types;
pub mod validation;

pub use types::{Process, ProcessMetrics, ProcessSpec};
pub use validation::{build_process_set, validate_process_set, worst_case_horizon};
