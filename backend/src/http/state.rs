//! Application state for the HTTP server.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::LaunchDataset;
use crate::services::Dashboard;

/// Shared application state passed to all handlers.
///
/// The dashboard owns the launch table; handlers that only read it go
/// through [`AppState::dataset`].
#[derive(Clone)]
pub struct AppState {
    /// The single live dashboard; the lock serializes control events
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    /// Create a new application state around a loaded dataset.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(Dashboard::new(dataset))),
        }
    }

    /// The launch table, read-only after startup.
    pub fn dataset(&self) -> Arc<LaunchDataset> {
        self.dashboard.lock().shared_dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, Outcome};
    use qtty::Kilograms;

    #[test]
    fn test_dashboard_owns_the_dataset() {
        let dataset = Arc::new(
            LaunchDataset::from_records(vec![LaunchRecord::new(
                "A",
                Kilograms::new(1000.0),
                Outcome::Success,
                "FT",
            )])
            .unwrap(),
        );
        let state = AppState::new(Arc::clone(&dataset));

        assert!(Arc::ptr_eq(&state.dataset(), &dataset));
        assert_eq!(state.dashboard.lock().dataset().len(), 1);
    }
}
