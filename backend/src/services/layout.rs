//! Dashboard layout derived from the loaded dataset.

use crate::api::{
    DashboardLayout, DropdownOption, OutputId, PayloadSlider, SiteDropdown, ALL_SITES_LABEL,
    DASHBOARD_TITLE, PAYLOAD_SLIDER_LABEL, PAYLOAD_SLIDER_STEP, SITE_DROPDOWN_PLACEHOLDER,
};
use crate::models::{LaunchDataset, Selection, ALL_SITES};

/// Describe the controls and outputs of the dashboard page.
///
/// The dropdown lists the "all sites" sentinel first, then every site in
/// order of first appearance. The slider spans the global payload bounds.
pub fn dashboard_layout(dataset: &LaunchDataset) -> DashboardLayout {
    let options = std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(dataset.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect();

    let bounds = dataset.bounds();

    DashboardLayout {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: SiteDropdown {
            options,
            placeholder: SITE_DROPDOWN_PLACEHOLDER.to_string(),
            searchable: true,
        },
        payload_slider: PayloadSlider {
            label: PAYLOAD_SLIDER_LABEL.to_string(),
            min: bounds.min.value(),
            max: bounds.max.value(),
            step: PAYLOAD_SLIDER_STEP,
        },
        initial_selection: Selection::initial(dataset),
        outputs: OutputId::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome, SiteSelection};
    use qtty::Kilograms;

    #[test]
    fn test_layout_options_and_slider() {
        let dataset = LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", Kilograms::new(2490.0), Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", Kilograms::new(0.0), Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", Kilograms::new(9600.0), Outcome::Success, "B4"),
        ])
        .unwrap();

        let layout = dashboard_layout(&dataset);

        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(layout.site_dropdown.options[0].label, "All Sites");
        assert_eq!(layout.payload_slider.min, 0.0);
        assert_eq!(layout.payload_slider.max, 9600.0);
        assert_eq!(layout.payload_slider.step, 1000.0);
        assert_eq!(layout.initial_selection.site, SiteSelection::All);
        assert_eq!(layout.outputs.len(), 2);
    }
}
