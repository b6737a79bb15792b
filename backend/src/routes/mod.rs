pub mod chart;
pub mod controls;
pub mod correlation;
pub mod layout;
pub mod proportion;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Route constants are mounted under /v1 by the router
        assert_eq!(super::proportion::GET_PROPORTION_CHART, "/charts/proportion");
        assert_eq!(super::correlation::GET_CORRELATION_CHART, "/charts/correlation");
        assert_eq!(super::controls::GET_CHARTS, "/charts");
        assert_eq!(super::controls::POST_CONTROL_CHANGE, "/controls/{control_id}");
        assert_eq!(super::layout::GET_LAYOUT, "/layout");
    }
}
