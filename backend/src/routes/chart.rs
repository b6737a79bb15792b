use serde::{Deserialize, Serialize};

use super::correlation::ScatterChart;
use super::proportion::PieChart;

/// Declarative, renderer-agnostic chart description.
///
/// Serialized with a `kind` tag so the page can pick the trace type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(chart) => &chart.title,
            ChartSpec::Scatter(chart) => &chart.title,
        }
    }

    /// True when the chart has nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(chart) => chart.slices.is_empty(),
            ChartSpec::Scatter(chart) => chart.point_count() == 0,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(chart) => Some(chart),
            _ => None,
        }
    }
}

impl From<PieChart> for ChartSpec {
    fn from(chart: PieChart) -> Self {
        ChartSpec::Pie(chart)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(chart: ScatterChart) -> Self {
        ChartSpec::Scatter(chart)
    }
}
