use serde::{Deserialize, Serialize};

// =========================================================
// Proportion (pie) chart types + route
// =========================================================

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// Pie chart of success counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of every slice value.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

/// Stateless proportion chart route.
pub const GET_PROPORTION_CHART: &str = "/charts/proportion";

/// Query parameters for the stateless proportion chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProportionQuery {
    /// Site identifier or `ALL` (default)
    #[serde(default)]
    pub site: Option<String>,
}
