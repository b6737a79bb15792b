//! Selection state driven by the dashboard controls.

use qtty::Kilograms;
use serde::{Deserialize, Serialize};

use super::dataset::{LaunchDataset, PayloadBounds};

/// Dropdown value meaning "every site".
pub const ALL_SITES: &str = "ALL";

/// Site filter: the "all sites" sentinel or one site identifier.
///
/// Serialized as the raw dropdown value, so `"ALL"` maps to [`SiteSelection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a record at `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass range. An inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub lower: Kilograms,
    pub upper: Kilograms,
}

impl PayloadRange {
    pub fn new(lower: Kilograms, upper: Kilograms) -> Self {
        Self { lower, upper }
    }

    pub fn full(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }

    pub fn contains(&self, mass: Kilograms) -> bool {
        self.lower <= mass && mass <= self.upper
    }

    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }

    /// Clamp both ends into `bounds` without reordering them.
    pub fn clamped_to(self, bounds: PayloadBounds) -> Self {
        Self::new(bounds.clamp(self.lower), bounds.clamp(self.upper))
    }
}

/// Current value of every dashboard control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Selection {
    /// Initial state: all sites, full payload range.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::full(dataset.bounds()),
        }
    }
}
