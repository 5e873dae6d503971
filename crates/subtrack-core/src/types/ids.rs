//! Unique identifier type for subscription records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a subscription record.
///
/// Internally represented as milliseconds since the Unix epoch at creation
/// time, which matches the persisted integer `id` field and gives practical
/// uniqueness for interactively created records. Callers that generate ids
/// must still check for collisions against the live list (see
/// [`successor`](SubscriptionId::successor)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(i64);

impl SubscriptionId {
    /// Creates an id from the current wall-clock time.
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    /// Returns the next id value.
    ///
    /// Used to resolve collisions when two records are created within the
    /// same millisecond.
    pub fn successor(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the inner integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubscriptionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SubscriptionId> for i64 {
    fn from(id: SubscriptionId) -> Self {
        id.0
    }
}

impl std::str::FromStr for SubscriptionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
