//! Pure projections from session state to the plain structs a renderer
//! consumes. Nothing in this tree mutates state.

pub mod calculations;
pub mod dashboard;
pub mod onboarding;
pub mod outlet_details;
pub mod outlets;
pub mod performance;
pub mod settings;

use crate::core::session::SessionState;

/// The identity shown in page headers and the settings profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge {
    pub name: String,
    pub email: String,
}

impl UserBadge {
    pub fn project(state: &SessionState) -> Self {
        Self {
            name: state.user.name.clone(),
            email: state.user.email.clone(),
        }
    }
}

pub(crate) fn count_label(shown: usize, total: usize, noun: &str) -> String {
    let plural = if total == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    };
    format!("Showing {shown} of {total} {plural}")
}
