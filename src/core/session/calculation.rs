use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const CODE_PREFIX: &str = "CALC-";

/// Human-readable sequential calculation code, e.g. "CALC-001".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(String);

impl CalculationId {
    pub(super) fn from_sequence(seq: u32) -> Self {
        Self(format!("{CODE_PREFIX}{seq:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(super) fn sequence(&self) -> Option<u32> {
        self.0.strip_prefix(CODE_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A saved inventory calculation, summarized by code, creation date
/// (a plain YYYY-MM-DD string) and line-item count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub id: CalculationId,
    pub created_at: String,
    pub articles: u32,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone)]
pub struct NewCalculation {
    pub articles: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CalculationUpdate {
    pub articles: Option<u32>,
}

pub trait CalculationRepository {
    fn calculations(&self) -> &[Calculation];
    fn calculation_by_id(&self, id: &CalculationId) -> Option<&Calculation>;
    fn add_calculation(&mut self, calculation: NewCalculation) -> Calculation;
    /// Replace-on-save round trip. `None` when the id is unknown, in which
    /// case nothing is persisted.
    fn update_calculation(
        &mut self,
        id: &CalculationId,
        update: CalculationUpdate,
    ) -> Option<Calculation>;
    fn delete_calculation(&mut self, id: &CalculationId) -> bool;
}

pub(super) fn today_string() -> String {
    let today = OffsetDateTime::now_utc().date();
    format!(
        "{:04}-{:02}-{:02}",
        today.year(),
        u8::from(today.month()),
        today.day()
    )
}
