//! Proportion view model: success counts for the pie chart.

use crate::api::{PieChart, PieSlice};
use crate::models::{LaunchDataset, Outcome, SiteSelection};

pub const ALL_SITES_PIE_TITLE: &str = "Total Successful Launches for All Sites";

/// Build the pie chart for the selected site.
///
/// - All sites: one slice per known site, valued by its success count. Sites
///   without a single success still get a (zero) slice.
/// - One site: one slice per outcome class present at that site, ordered by
///   class, valued by record count. An unknown site gives no slices.
pub fn proportion_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => PieChart {
            title: ALL_SITES_PIE_TITLE.to_string(),
            slices: dataset
                .sites()
                .iter()
                .map(|site| PieSlice {
                    label: site.clone(),
                    value: dataset
                        .records_for_site(site)
                        .filter(|r| r.outcome.is_success())
                        .count(),
                })
                .collect(),
        },
        SiteSelection::Site(site) => {
            let mut counts = [0usize; 2];
            for record in dataset.records_for_site(site) {
                counts[usize::from(record.outcome.class())] += 1;
            }

            let slices = [Outcome::Failure, Outcome::Success]
                .into_iter()
                .zip(counts)
                .filter(|(_, count)| *count > 0)
                .map(|(outcome, count)| PieSlice {
                    label: outcome.to_string(),
                    value: count,
                })
                .collect();

            PieChart {
                title: format!("Launch Success Rate for {}", site),
                slices,
            }
        }
    }
}
