/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Simulated clock value in abstract time units
pub type Time = u64;

/// Scheduling priority (lower value = higher priority)
pub type Priority = u32;

/// Process identifier
///
/// # Performance
/// Short identifiers (≤23 bytes) such as `P0` or `T12` are stored inline
/// without heap allocation
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ProcessId {
    inner: SmartString,
}

impl ProcessId {
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.trim().is_empty()
    }
}

impl From<&str> for ProcessId {
    #[inline]
    fn from(s: &str) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<String> for ProcessId {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<&String> for ProcessId {
    #[inline]
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ProcessId> for String {
    #[inline]
    fn from(id: ProcessId) -> Self {
        id.inner.into()
    }
}

impl AsRef<str> for ProcessId {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for ProcessId {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ProcessId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ProcessId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for ProcessId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProcessId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}
