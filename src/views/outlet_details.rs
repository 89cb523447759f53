use crate::core::session::{OutletId, SessionState};

const PLACEHOLDER: &str = "—";

/// Details panel for one outlet: the selected id when it resolves, else
/// the first outlet, else placeholder copy.
#[derive(Debug, Clone, PartialEq)]
pub struct OutletDetailsModel {
    pub selected: Option<OutletId>,
    pub title: String,
    pub campaign: String,
    pub address: String,
    pub status: String,
}

impl OutletDetailsModel {
    pub fn project(state: &SessionState, selected: Option<&OutletId>) -> Self {
        let outlet = selected
            .and_then(|id| state.outlet_by_id(id))
            .or_else(|| state.outlets.first());
        match outlet {
            Some(outlet) => Self {
                selected: Some(outlet.id.clone()),
                title: outlet.name.clone(),
                campaign: outlet.campaign.clone(),
                address: outlet.address.clone(),
                status: "Active".to_string(),
            },
            None => Self {
                selected: None,
                title: "Select an outlet".to_string(),
                campaign: PLACEHOLDER.to_string(),
                address: PLACEHOLDER.to_string(),
                status: PLACEHOLDER.to_string(),
            },
        }
    }
}
