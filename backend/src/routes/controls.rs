use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chart::ChartSpec;
use crate::models::Selection;

// =========================================================
// Control / output identifiers + control-change route
// =========================================================

/// Input widgets the user can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub const ALL: [ControlId; 2] = [ControlId::SiteDropdown, ControlId::PayloadSlider];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

/// Unrecognized control identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown control '{0}'")]
pub struct UnknownControl(pub String);

impl FromStr for ControlId {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownControl(s.to_string()))
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart widgets fed by the view models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub const ALL: [OutputId; 2] = [OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control-change route; `{control_id}` is a [`ControlId`].
pub const POST_CONTROL_CHANGE: &str = "/controls/{control_id}";

/// Current selection charts route.
pub const GET_CHARTS: &str = "/charts";

/// Body of a control-change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlChangeRequest {
    /// New control value: a site string for the dropdown, `[lower, upper]` for the slider
    pub value: serde_json::Value,
}

/// Selection after an update plus every chart that was re-rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub selection: Selection,
    pub outputs: BTreeMap<OutputId, ChartSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_id_round_trips_through_str() {
        for id in ControlId::ALL {
            assert_eq!(id.as_str().parse::<ControlId>().unwrap(), id);
        }
        assert_eq!(
            "volume-knob".parse::<ControlId>().unwrap_err(),
            UnknownControl("volume-knob".to_string())
        );
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for id in ControlId::ALL {
            assert_eq!(serde_json::to_value(id).unwrap(), id.as_str());
        }
        for id in OutputId::ALL {
            assert_eq!(serde_json::to_value(id).unwrap(), id.as_str());
        }
    }
}
