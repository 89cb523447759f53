use crate::core::session::{
    calculation::{Calculation, CalculationId},
    model::SessionState,
    outlet::{Outlet, OutletId},
};

/// One-time demo content injection, gated by the sticky `seeded_sample`
/// flag. Functional update: the input is never mutated.
///
/// Each collection is populated independently and only when currently
/// empty, so a first seed never touches data the user already created.
/// Once the flag is set, emptying a collection does not re-arm seeding;
/// only a full reset does.
pub fn seed_sample_data(state: &SessionState) -> SessionState {
    if state.seeded_sample {
        return state.clone();
    }
    let mut seeded = state.clone();
    seeded.seeded_sample = true;
    if seeded.outlets.is_empty() {
        seeded.outlets.push(demo_outlet());
    }
    if seeded.calculations.is_empty() {
        seeded.calculations.extend(demo_calculations());
    }
    seeded
}

fn demo_outlet() -> Outlet {
    Outlet {
        id: OutletId::generate(),
        name: "Campari".to_string(),
        address: "Hans im Glück, Munich".to_string(),
        campaign: "Campari".to_string(),
        _guard: (),
    }
}

fn demo_calculations() -> Vec<Calculation> {
    [(1, "2025-10-21", 3), (2, "2025-10-22", 5), (3, "2025-10-23", 2)]
        .into_iter()
        .map(|(seq, date, articles)| Calculation {
            id: CalculationId::from_sequence(seq),
            created_at: date.to_string(),
            articles,
            _guard: (),
        })
        .collect()
}
