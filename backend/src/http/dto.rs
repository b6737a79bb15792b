//! Data Transfer Objects for the HTTP API.
//!
//! Chart and layout DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Charts
    ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries,
    // Controls
    ControlChangeRequest, ControlId, DashboardUpdate, OutputId,
    // Layout
    DashboardLayout, DropdownOption, PayloadSlider, SiteDropdown,
    // Queries
    CorrelationQuery, ProportionQuery,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// SHA-256 of the source table, when loaded from a file
    pub dataset_checksum: Option<String>,
    /// When the table was loaded
    pub loaded_at: DateTime<Utc>,
}
