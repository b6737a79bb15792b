use qtty::Kilograms;
use serde::{Deserialize, Serialize};

// =========================================================
// Correlation (scatter) chart types + route
// =========================================================

/// One plotted launch: payload mass against outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: Kilograms,
    pub y: u8,
}

/// Points sharing a booster version category (one color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub category: String,
    pub points: Vec<ScatterPoint>,
}

/// Scatter chart of payload mass vs. launch outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn series_for(&self, category: &str) -> Option<&ScatterSeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Stateless correlation chart route.
pub const GET_CORRELATION_CHART: &str = "/charts/correlation";

/// Query parameters for the stateless correlation chart.
///
/// Missing bounds fall back to the dataset bounds. Given bounds are used as
/// is: unlike a `payload-slider` change they are not clamped to the dataset
/// bounds, and an inverted range yields an empty chart. Non-finite bounds are
/// rejected with 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationQuery {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub payload_min: Option<f64>,
    #[serde(default)]
    pub payload_max: Option<f64>,
}
