//! Service layer: the view models and the binding layer that drives them.
//!
//! View models are pure functions of the loaded dataset and the current
//! selection. The dashboard module owns the selection and decides which view
//! models to re-run when a control changes.

pub mod correlation;
pub mod dashboard;
pub mod layout;
pub mod proportion;

pub use correlation::correlation_chart;
pub use dashboard::{default_bindings, Binding, ControlError, ControlEvent, Dashboard, RenderFn};
pub use layout::dashboard_layout;
pub use proportion::proportion_chart;
