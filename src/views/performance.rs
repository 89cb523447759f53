use crate::core::session::SessionState;

/// Presentation token for the performance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceView {
    Cards,
    Table,
}

/// Performance page. Data only shows once both outlets and calculations
/// exist; until then the page renders its empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceModel {
    pub has_data: bool,
    pub view: PerformanceView,
    pub outlet_names: Vec<String>,
}

impl PerformanceModel {
    pub fn project(state: &SessionState, view: PerformanceView) -> Self {
        let has_data = state.has_outlets() && state.has_calculations();
        let outlet_names = if has_data {
            state.outlets.iter().map(|o| o.name.clone()).collect()
        } else {
            Vec::new()
        };
        Self {
            has_data,
            view,
            outlet_names,
        }
    }
}
