use crate::core::session::{Outlet, SessionState};
use crate::views::count_label;

/// Outlets list with a case-insensitive substring filter over name,
/// address and campaign. Rows keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutletsModel {
    pub rows: Vec<Outlet>,
    pub count_label: String,
}

impl OutletsModel {
    pub fn project(state: &SessionState, filter: &str) -> Self {
        let term = filter.trim().to_lowercase();
        let rows: Vec<Outlet> = state
            .outlets
            .iter()
            .filter(|outlet| {
                term.is_empty()
                    || outlet.name.to_lowercase().contains(&term)
                    || outlet.address.to_lowercase().contains(&term)
                    || outlet.campaign.to_lowercase().contains(&term)
            })
            .cloned()
            .collect();
        let count_label = count_label(rows.len(), state.outlets.len(), "outlet");
        Self { rows, count_label }
    }
}
