/*!
 * Execution Timeline
 * Contiguous execution intervals produced by a scheduling run
 */

use crate::core::limits::IDLE_LABEL;
use crate::core::{ProcessId, Time};
use serde::{Serialize, Serializer};
use std::fmt;

/// Owner of an execution interval
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    Process(ProcessId),
    Idle,
}

impl Slot {
    /// Label shown in charts (`IDLE` for idle intervals)
    pub fn label(&self) -> &str {
        match self {
            Self::Process(pid) => pid.as_str(),
            Self::Idle => IDLE_LABEL,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn pid(&self) -> Option<&ProcessId> {
        match self {
            Self::Process(pid) => Some(pid),
            Self::Idle => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// One half-open execution interval `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub slot: Slot,
    pub start: Time,
    pub end: Time,
}

impl TimelineEntry {
    #[inline]
    pub const fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered sequence of execution intervals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an interval; empty intervals are dropped
    pub fn push(&mut self, slot: Slot, start: Time, end: Time) {
        debug_assert!(end >= start, "interval ends before it starts");
        if end > start {
            self.entries.push(TimelineEntry { slot, start, end });
        }
    }

    /// Append an interval owned by `pid`
    pub fn push_process(&mut self, pid: &ProcessId, start: Time, end: Time) {
        self.push(Slot::Process(pid.clone()), start, end);
    }

    pub fn push_idle(&mut self, start: Time, end: Time) {
        self.push(Slot::Idle, start, end);
    }

    #[inline]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last interval (0 when empty)
    pub fn end_time(&self) -> Time {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Total time assigned to `pid`
    pub fn busy_time(&self, pid: &ProcessId) -> Time {
        self.entries
            .iter()
            .filter(|e| e.slot.pid() == Some(pid))
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Total non-idle time
    pub fn total_busy_time(&self) -> Time {
        self.entries
            .iter()
            .filter(|e| !e.slot.is_idle())
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Copy ordered by start, with idle intervals covering every gap from time 0
    pub fn with_idle_gaps(&self) -> Timeline {
        let mut sorted: Vec<&TimelineEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.start);

        let mut filled = Timeline::with_capacity(sorted.len() * 2);
        let mut cursor = 0;
        for entry in sorted {
            if entry.start > cursor {
                filled.push_idle(cursor, entry.start);
            }
            filled.push(entry.slot.clone(), entry.start, entry.end);
            cursor = cursor.max(entry.end);
        }
        filled
    }

    /// Copy with touching intervals of the same owner merged
    pub fn coalesced(&self) -> Timeline {
        let mut merged: Vec<TimelineEntry> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match merged.last_mut() {
                Some(last) if last.slot == entry.slot && last.end == entry.start => {
                    last.end = entry.end;
                }
                _ => merged.push(entry.clone()),
            }
        }
        Timeline { entries: merged }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
