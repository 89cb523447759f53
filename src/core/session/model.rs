use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::session::{
    calculation::{Calculation, CalculationId},
    outlet::{Outlet, OutletId},
};

pub const GUEST_NAME: &str = "Guest";
pub const GUEST_EMAIL: &str = "guest@example.com";

/// The single persisted record. Everything the application remembers
/// between runs lives here; there is exactly one of these per session file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub user: UserProfile,
    pub outlets: Vec<Outlet>,
    pub calculations: Vec<Calculation>,
    pub theme: Theme,
    pub alerts_enabled: bool,
    pub seeded_sample: bool,
    pub onboarding_seen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn guest() -> Self {
        Self {
            name: GUEST_NAME.to_string(),
            email: GUEST_EMAIL.to_string(),
        }
    }

    pub fn is_guest(&self) -> bool {
        self.name == GUEST_NAME && self.email == GUEST_EMAIL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: UserProfile::guest(),
            outlets: Vec::new(),
            calculations: Vec::new(),
            theme: Theme::Light,
            alerts_enabled: true,
            seeded_sample: false,
            onboarding_seen: false,
        }
    }
}

impl SessionState {
    /// Rebuild a state from untrusted JSON, field by field.
    ///
    /// Total function: any shape of input yields a state satisfying the
    /// record invariants (collections present, ids unique, flags boolean).
    /// Fallbacks per field:
    /// - top level not an object: whole default state
    /// - `user` not an object, or name/email not strings: guest defaults
    /// - `outlets` / `calculations` not arrays: empty; malformed elements
    ///   and duplicate ids (first occurrence wins) are dropped
    /// - `theme` anything but "light"/"dark": light
    /// - `alertsEnabled` non-boolean: true; sticky flags non-boolean: false
    pub fn reconcile(value: Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let user = match map.get("user") {
            Some(Value::Object(user)) => UserProfile {
                name: string_or(user.get("name"), GUEST_NAME),
                email: string_or(user.get("email"), GUEST_EMAIL),
            },
            _ => UserProfile::guest(),
        };

        let outlets: Vec<Outlet> = collection(map.get("outlets"));
        let outlets = dedup_by_id(outlets, |o: &Outlet| o.id.clone());
        let calculations: Vec<Calculation> = collection(map.get("calculations"));
        let calculations = dedup_by_id(calculations, |c: &Calculation| c.id.clone());

        let theme = match map.get("theme").and_then(Value::as_str) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        };

        Self {
            user,
            outlets,
            calculations,
            theme,
            alerts_enabled: map
                .get("alertsEnabled")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            seeded_sample: map
                .get("seededSample")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            onboarding_seen: map
                .get("onboardingSeen")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    pub fn outlet_by_id(&self, id: &OutletId) -> Option<&Outlet> {
        self.outlets.iter().find(|outlet| &outlet.id == id)
    }

    pub fn calculation_by_id(&self, id: &CalculationId) -> Option<&Calculation> {
        self.calculations.iter().find(|calc| &calc.id == id)
    }

    pub fn has_outlets(&self) -> bool {
        !self.outlets.is_empty()
    }

    pub fn has_calculations(&self) -> bool {
        !self.calculations.is_empty()
    }

    pub fn total_articles(&self) -> u32 {
        self.calculations.iter().map(|calc| calc.articles).sum()
    }

    /// Next free sequential calculation code. Computed from the maximum
    /// surviving sequence number, so deleting a record never frees its code
    /// for reuse. A persisted record may already carry the top sequence
    /// number; the add saturates there and the lowest free code is handed
    /// out instead, keeping codes unique.
    pub fn next_calculation_id(&self) -> CalculationId {
        let max = self
            .calculations
            .iter()
            .filter_map(|calc| calc.id.sequence())
            .max()
            .unwrap_or(0);
        let next = CalculationId::from_sequence(max.saturating_add(1));
        if self.calculation_by_id(&next).is_none() {
            return next;
        }
        (1..u32::MAX)
            .map(CalculationId::from_sequence)
            .find(|id| self.calculation_by_id(id).is_none())
            .unwrap_or(next)
    }
}

fn string_or(value: Option<&Value>, fallback: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => fallback.to_string(),
    }
}

fn collection<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn dedup_by_id<T, I: PartialEq>(items: Vec<T>, id: impl Fn(&T) -> I) -> Vec<T> {
    let mut seen: Vec<I> = Vec::new();
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        let item_id = id(&item);
        if seen.contains(&item_id) {
            continue;
        }
        seen.push(item_id);
        unique.push(item);
    }
    unique
}
