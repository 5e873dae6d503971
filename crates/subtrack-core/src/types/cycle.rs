//! Renewal cycle enumeration.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// How often a subscription renews.
///
/// Serializes as the exact strings `"Monthly"` / `"Yearly"` for wire
/// compatibility with the persisted record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenewalCycle {
    /// Renews every month.
    Monthly,
    /// Renews every year.
    Yearly,
}

impl RenewalCycle {
    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenewalCycle::Monthly => "Monthly",
            RenewalCycle::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for RenewalCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RenewalCycle {
    type Err = Error;

    /// Parses a cycle name, case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(RenewalCycle::Monthly),
            "yearly" => Ok(RenewalCycle::Yearly),
            _ => Err(Error::validation_field(
                "renewal cycle",
                "must be Monthly or Yearly",
            )),
        }
    }
}
