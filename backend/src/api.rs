//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::chart::ChartSpec;
pub use crate::routes::controls::ControlChangeRequest;
pub use crate::routes::controls::ControlId;
pub use crate::routes::controls::DashboardUpdate;
pub use crate::routes::controls::OutputId;
pub use crate::routes::controls::UnknownControl;
pub use crate::routes::correlation::CorrelationQuery;
pub use crate::routes::correlation::ScatterChart;
pub use crate::routes::correlation::ScatterPoint;
pub use crate::routes::correlation::ScatterSeries;
pub use crate::routes::layout::DashboardLayout;
pub use crate::routes::layout::DropdownOption;
pub use crate::routes::layout::PayloadSlider;
pub use crate::routes::layout::SiteDropdown;
pub use crate::routes::layout::{
    ALL_SITES_LABEL, DASHBOARD_TITLE, PAYLOAD_SLIDER_LABEL, PAYLOAD_SLIDER_STEP,
    SITE_DROPDOWN_PLACEHOLDER,
};
pub use crate::routes::proportion::PieChart;
pub use crate::routes::proportion::PieSlice;
pub use crate::routes::proportion::ProportionQuery;

pub use crate::models::{
    LaunchRecord, Outcome, PayloadBounds, PayloadRange, Selection, SiteSelection, ALL_SITES,
};
