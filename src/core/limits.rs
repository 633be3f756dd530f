/*!
 * Simulation Limits and Constants
 *
 * Centralized location for defaults and guard values shared by the
 * scheduling, real-time and resource-safety modules.
 */

use super::types::Time;

// =============================================================================
// CPU SCHEDULING
// =============================================================================

/// Round-robin quantum used when the caller does not supply one
pub const DEFAULT_QUANTUM: Time = 2;

/// Upper bound on the simulated clock for a single run
/// Unit-stepped strategies and the RM simulation iterate once per time unit
pub const MAX_SIMULATION_HORIZON: Time = 1_000_000;

// =============================================================================
// TIMELINE LABELS
// =============================================================================

/// Label rendered for idle intervals
pub const IDLE_LABEL: &str = "IDLE";

/// Prefix of periodic task labels (`T0`, `T1`, ...)
pub const TASK_LABEL_PREFIX: &str = "T";

/// Prefix of Banker's process labels (`P0`, `P1`, ...)
pub const PROCESS_LABEL_PREFIX: &str = "P";
