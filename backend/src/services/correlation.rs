//! Correlation view model: payload mass against outcome for the scatter chart.

use crate::api::{ScatterChart, ScatterPoint, ScatterSeries};
use crate::models::{LaunchDataset, PayloadRange, SiteSelection};

pub const ALL_SITES_SCATTER_TITLE: &str = "Success count on Payload mass for all sites";
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "class";

/// Build the scatter chart for the selected site and payload range.
///
/// Records are kept when their payload lies inside `range` (inclusive) and,
/// for a specific site, when they were launched from it. Points are grouped
/// into one series per booster version category, in order of first
/// appearance. An inverted range keeps nothing.
pub fn correlation_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for record in dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass) && site.matches(&r.site))
    {
        let point = ScatterPoint {
            x: record.payload_mass,
            y: record.outcome.class(),
        };
        match series
            .iter_mut()
            .find(|s| s.category == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                category: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = match site {
        SiteSelection::All => ALL_SITES_SCATTER_TITLE.to_string(),
        SiteSelection::Site(site) => format!("Success count on Payload mass for {}", site),
    };

    ScatterChart {
        title,
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};
    use qtty::Kilograms;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("A", Kilograms::new(500.0), Outcome::Failure, "v1.0"),
            LaunchRecord::new("A", Kilograms::new(2500.0), Outcome::Success, "FT"),
            LaunchRecord::new("B", Kilograms::new(4000.0), Outcome::Success, "FT"),
            LaunchRecord::new("B", Kilograms::new(9600.0), Outcome::Failure, "B4"),
        ])
        .unwrap()
    }

    fn range(lower: f64, upper: f64) -> PayloadRange {
        PayloadRange::new(Kilograms::new(lower), Kilograms::new(upper))
    }

    #[test]
    fn test_full_range_all_sites_plots_every_record() {
        let dataset = dataset();
        let chart = correlation_chart(
            &dataset,
            &SiteSelection::All,
            PayloadRange::full(dataset.bounds()),
        );

        assert_eq!(chart.title, ALL_SITES_SCATTER_TITLE);
        assert_eq!(chart.point_count(), 4);
        let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["v1.0", "FT", "B4"]);
        assert_eq!(chart.series_for("FT").map(|s| s.points.len()), Some(2));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let chart = correlation_chart(&dataset(), &SiteSelection::All, range(2500.0, 4000.0));
        assert_eq!(chart.point_count(), 2);
    }

    #[test]
    fn test_site_filter_applies_after_range() {
        let chart = correlation_chart(&dataset(), &SiteSelection::parse("B"), range(0.0, 5000.0));

        assert_eq!(chart.title, "Success count on Payload mass for B");
        assert_eq!(chart.point_count(), 1);
        let point = chart.series[0].points[0];
        assert_eq!(point.x.value(), 4000.0);
        assert_eq!(point.y, 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let chart = correlation_chart(&dataset(), &SiteSelection::All, range(5000.0, 1000.0));
        assert_eq!(chart.point_count(), 0);
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let dataset = dataset();
        let chart = correlation_chart(
            &dataset,
            &SiteSelection::parse("Mars"),
            PayloadRange::full(dataset.bounds()),
        );
        assert_eq!(chart.point_count(), 0);
    }
}
