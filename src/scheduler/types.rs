/*!
 * Scheduler Types
 * Policy selection and time quantum
 */

use crate::core::{Time, ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// CPU scheduling discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest remaining time first, preemptive
    Srtf,
    /// FIFO ready queue with a fixed time quantum
    RoundRobin,
    /// Lowest priority value runs, preempting on strictly better arrivals
    PriorityPreemptive,
    /// Lowest priority value runs to completion
    PriorityNonPreemptive,
}

impl SchedulingPolicy {
    /// Every policy, in presentation order
    pub const ALL: [SchedulingPolicy; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::RoundRobin,
        Self::PriorityPreemptive,
        Self::PriorityNonPreemptive,
    ];

    /// Canonical string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "round_robin",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::PriorityNonPreemptive => "priority_non_preemptive",
        }
    }

    /// Human-readable name for reports
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "Round Robin",
            Self::PriorityPreemptive => "Priority Preemptive",
            Self::PriorityNonPreemptive => "Priority Non-Preemptive",
        }
    }

    /// Only round-robin consumes a quantum
    #[inline]
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    #[inline]
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PriorityPreemptive
        )
    }
}

impl FromStr for SchedulingPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "srtf" | "srt" => Ok(Self::Srtf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority_preemptive" | "priority_p" | "prio_p" => Ok(Self::PriorityPreemptive),
            "priority_non_preemptive" | "priority_np" | "prio_np" | "priority" => {
                Ok(Self::PriorityNonPreemptive)
            }
            _ => Err(ValidationError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round-robin time slice, always greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Time);

impl TimeQuantum {
    pub fn new(units: Time) -> ValidationResult<Self> {
        if units == 0 {
            return Err(ValidationError::InvalidQuantum(0));
        }
        Ok(Self(units))
    }

    /// Build from signed boundary input
    pub fn from_signed(units: i64) -> ValidationResult<Self> {
        Time::try_from(units)
            .ok()
            .filter(|&u| u > 0)
            .map(Self)
            .ok_or(ValidationError::InvalidQuantum(units))
    }

    #[inline(always)]
    pub const fn get(&self) -> Time {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = i64::deserialize(deserializer)?;
        Self::from_signed(units).map_err(serde::de::Error::custom)
    }
}
