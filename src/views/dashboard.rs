use crate::core::session::{Outlet, SessionState};

const RECENT_LIMIT: usize = 4;

/// Overview page. The hero copy and empty-state switch on whether any
/// outlet exists yet; stat values come straight from state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub outlet_count: usize,
    pub calculation_count: usize,
    pub total_articles: u32,
    /// Last four outlets, oldest first.
    pub recent_outlets: Vec<Outlet>,
    pub is_empty: bool,
}

impl DashboardModel {
    pub fn project(state: &SessionState) -> Self {
        let is_empty = !state.has_outlets();
        let (hero_title, hero_subtitle) = if is_empty {
            (
                "Welcome to CCM HUB",
                "You don't have any data yet. Start by creating an outlet or exploring services.",
            )
        } else {
            ("Overview", "Overview of your outlets and recent activity.")
        };
        let recent_start = state.outlets.len().saturating_sub(RECENT_LIMIT);
        Self {
            hero_title: hero_title.to_string(),
            hero_subtitle: hero_subtitle.to_string(),
            outlet_count: state.outlets.len(),
            calculation_count: state.calculations.len(),
            total_articles: state.total_articles(),
            recent_outlets: state.outlets[recent_start..].to_vec(),
            is_empty,
        }
    }
}
