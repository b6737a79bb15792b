use serde::{Deserialize, Serialize};

use super::controls::OutputId;
use crate::models::Selection;

// =========================================================
// Dashboard layout types + route
// =========================================================

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const ALL_SITES_LABEL: &str = "All Sites";
pub const SITE_DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";
pub const PAYLOAD_SLIDER_LABEL: &str = "Payload range (Kg):";
/// Slider step in kilograms.
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub options: Vec<DropdownOption>,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Everything the page needs to draw its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: SiteDropdown,
    pub payload_slider: PayloadSlider,
    pub initial_selection: Selection,
    pub outputs: Vec<OutputId>,
}

/// Layout route.
pub const GET_LAYOUT: &str = "/layout";
