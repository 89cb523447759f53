use crate::core::session::{SessionState, Theme};
use crate::views::UserBadge;

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsModel {
    pub profile: UserBadge,
    pub theme: Theme,
    pub alerts_enabled: bool,
    pub alerts_label: String,
}

impl SettingsModel {
    pub fn project(state: &SessionState) -> Self {
        Self {
            profile: UserBadge::project(state),
            theme: state.theme,
            alerts_enabled: state.alerts_enabled,
            alerts_label: if state.alerts_enabled {
                "Enabled".to_string()
            } else {
                "Disabled".to_string()
            },
        }
    }
}
