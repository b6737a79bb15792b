//! Launch records as loaded from the dataset.

use qtty::Kilograms;
use serde::{Deserialize, Serialize};

/// Binary result of a launch attempt.
///
/// Serialized as its class value (`0` for failure, `1` for success), which is
/// how the source table encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Class value used by the dataset and by chart encodings.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Map a raw class value to an outcome. Anything other than 0/1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Outcome::from_class(i64::from(value))
            .ok_or_else(|| format!("invalid outcome class {}, expected 0 or 1", value))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class())
    }
}

/// One launch attempt. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass: Kilograms,
    pub outcome: Outcome,
    /// Only used to group scatter points by color.
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass: Kilograms,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}
