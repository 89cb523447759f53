use crate::core::session::{Calculation, SessionState};
use crate::views::count_label;

/// Calculations list. The filter matches the code, the creation date, or
/// the article count rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationsModel {
    pub rows: Vec<Calculation>,
    pub count_label: String,
}

impl CalculationsModel {
    pub fn project(state: &SessionState, filter: &str) -> Self {
        let term = filter.trim().to_lowercase();
        let rows: Vec<Calculation> = state
            .calculations
            .iter()
            .filter(|calc| {
                term.is_empty()
                    || calc.id.as_str().to_lowercase().contains(&term)
                    || calc.created_at.to_lowercase().contains(&term)
                    || calc.articles.to_string().contains(&term)
            })
            .cloned()
            .collect();
        let count_label = count_label(rows.len(), state.calculations.len(), "calculation");
        Self { rows, count_label }
    }
}
