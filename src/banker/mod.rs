/*!
 * Banker's Module
 * Deadlock-avoidance safety check and resource-request handling
 */

pub mod input;
pub mod safety;
pub mod state;

pub use input::{matrix_from_signed, parse_row, units_from_signed};
pub use safety::{is_safe, RequestOutcome, SafetyReport};
pub use state::{compute_need, ResourceState, Units};
