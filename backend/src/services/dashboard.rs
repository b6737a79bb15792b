//! Reactive binding layer.
//!
//! Each [`Binding`] ties an output widget to the controls it depends on and
//! to the view-model function that renders it. [`Dashboard::dispatch`]
//! applies one control change to the selection (last write wins) and
//! re-renders every binding that listens to that control. Events are
//! applied one at a time through `&mut self`, so an invocation always sees
//! a consistent selection.

use std::collections::BTreeMap;
use std::sync::Arc;

use qtty::Kilograms;
use thiserror::Error;

use super::correlation::correlation_chart;
use super::proportion::proportion_chart;
use crate::api::{ChartSpec, ControlId, DashboardUpdate, OutputId, UnknownControl};
use crate::models::{LaunchDataset, PayloadRange, Selection, SiteSelection};

/// View-model entry point used by a binding.
pub type RenderFn = fn(&LaunchDataset, &Selection) -> ChartSpec;

/// Errors raised while decoding a control change.
///
/// The selection is left untouched when one of these is returned.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error(transparent)]
    UnknownControl(#[from] UnknownControl),

    #[error("invalid value for control '{control}': {reason}")]
    InvalidValue { control: ControlId, reason: String },
}

/// A decoded control change.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    SiteChanged(SiteSelection),
    PayloadRangeChanged(PayloadRange),
}

impl ControlEvent {
    pub fn control(&self) -> ControlId {
        match self {
            ControlEvent::SiteChanged(_) => ControlId::SiteDropdown,
            ControlEvent::PayloadRangeChanged(_) => ControlId::PayloadSlider,
        }
    }

    /// Decode a raw widget value.
    ///
    /// The dropdown sends a string; the slider sends `[lower, upper]`.
    pub fn from_json(control: ControlId, value: &serde_json::Value) -> Result<Self, ControlError> {
        match control {
            ControlId::SiteDropdown => value
                .as_str()
                .map(|s| ControlEvent::SiteChanged(SiteSelection::parse(s)))
                .ok_or_else(|| ControlError::InvalidValue {
                    control,
                    reason: format!("expected a site string, got {}", value),
                }),
            ControlId::PayloadSlider => {
                let [lower, upper] = serde_json::from_value::<[f64; 2]>(value.clone())
                    .map_err(|e| ControlError::InvalidValue {
                        control,
                        reason: format!("expected [lower, upper]: {}", e),
                    })?;
                Ok(ControlEvent::PayloadRangeChanged(PayloadRange::new(
                    Kilograms::new(lower),
                    Kilograms::new(upper),
                )))
            }
        }
    }
}

/// One output widget and how to render it.
#[derive(Clone)]
pub struct Binding {
    pub output: OutputId,
    pub inputs: Vec<ControlId>,
    render: RenderFn,
}

impl Binding {
    pub fn new(output: OutputId, inputs: impl Into<Vec<ControlId>>, render: RenderFn) -> Self {
        Self {
            output,
            inputs: inputs.into(),
            render,
        }
    }

    pub fn listens_to(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }

    pub fn render(&self, dataset: &LaunchDataset, selection: &Selection) -> ChartSpec {
        (self.render)(dataset, selection)
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

fn render_proportion(dataset: &LaunchDataset, selection: &Selection) -> ChartSpec {
    proportion_chart(dataset, &selection.site).into()
}

fn render_correlation(dataset: &LaunchDataset, selection: &Selection) -> ChartSpec {
    correlation_chart(dataset, &selection.site, selection.payload_range).into()
}

/// The pie listens to the site only; the scatter listens to both controls.
pub fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::new(
            OutputId::SuccessPieChart,
            [ControlId::SiteDropdown],
            render_proportion,
        ),
        Binding::new(
            OutputId::SuccessPayloadScatterChart,
            [ControlId::SiteDropdown, ControlId::PayloadSlider],
            render_correlation,
        ),
    ]
}

/// Live dashboard: the shared dataset, the current selection and the bindings.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<LaunchDataset>,
    selection: Selection,
    bindings: Vec<Binding>,
}

impl Dashboard {
    /// Dashboard in its initial state with the standard bindings.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self::with_bindings(dataset, default_bindings())
    }

    pub fn with_bindings(dataset: Arc<LaunchDataset>, bindings: Vec<Binding>) -> Self {
        let selection = Selection::initial(&dataset);
        Self {
            dataset,
            selection,
            bindings,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    /// A handle to the launch table that outlives a borrow of the dashboard.
    pub fn shared_dataset(&self) -> Arc<LaunchDataset> {
        Arc::clone(&self.dataset)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Render every output for the current selection.
    pub fn render_all(&self) -> DashboardUpdate {
        self.render_where(|_| true)
    }

    /// Apply one control change and re-render the outputs bound to it.
    pub fn dispatch(&mut self, event: ControlEvent) -> DashboardUpdate {
        let control = event.control();
        match event {
            ControlEvent::SiteChanged(site) => self.selection.site = site,
            ControlEvent::PayloadRangeChanged(range) => {
                self.selection.payload_range = range.clamped_to(self.dataset.bounds());
            }
        }

        log::debug!(
            "control '{}' changed: site={}, payload={}..{} kg",
            control,
            self.selection.site,
            self.selection.payload_range.lower.value(),
            self.selection.payload_range.upper.value()
        );

        self.render_where(|binding| binding.listens_to(control))
    }

    /// Decode a raw widget value and dispatch it.
    pub fn dispatch_json(
        &mut self,
        control: ControlId,
        value: &serde_json::Value,
    ) -> Result<DashboardUpdate, ControlError> {
        let event = ControlEvent::from_json(control, value)?;
        Ok(self.dispatch(event))
    }

    fn render_where<F>(&self, mut include: F) -> DashboardUpdate
    where
        F: FnMut(&Binding) -> bool,
    {
        let outputs: BTreeMap<OutputId, ChartSpec> = self
            .bindings
            .iter()
            .filter(|binding| include(*binding))
            .map(|binding| {
                (
                    binding.output,
                    binding.render(&self.dataset, &self.selection),
                )
            })
            .collect();

        DashboardUpdate {
            selection: self.selection.clone(),
            outputs,
        }
    }
}
