mod calculation;
mod forms;
mod model;
mod outlet;
mod seed;
mod state;

use std::path::Path;

pub use calculation::{
    Calculation, CalculationId, CalculationRepository, CalculationUpdate, NewCalculation,
};
pub use forms::{
    ArticleLine, ArticleTotals, CalculationForm, LOGIN_EMAIL_FALLBACK, LOGIN_NAME, LoginForm,
    OutletForm, REGISTER_EMAIL_FALLBACK, REGISTER_NAME_FALLBACK, RegistrationForm,
    VerificationCode,
};
pub use model::{GUEST_EMAIL, GUEST_NAME, SessionState, Theme, UserProfile};
pub use outlet::{NewOutlet, Outlet, OutletId, OutletRepository};
pub use seed::seed_sample_data;
pub use state::SessionStore;

/// The single mutation entry point for session data.
///
/// Owns the store and the current state; every mutating call updates the
/// in-memory state and persists it before returning, so program order is
/// also persistence order (there is exactly one logical writer).
#[derive(Debug)]
pub struct SessionDb {
    store: SessionStore,
    state: SessionState,
}

impl SessionDb {
    /// Open (or implicitly create) the session at `path`. Never fails:
    /// a missing or corrupt file simply yields the default state.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let store = SessionStore::new(path);
        let state = store.load();
        Self { store, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Login and registration both land here.
    pub fn sign_in(&mut self, user: UserProfile) {
        self.state.user = user;
        self.persist();
    }

    pub fn seed_sample_data(&mut self) {
        self.state = seed::seed_sample_data(&self.state);
        self.persist();
    }

    /// Marks the first-run tour as seen. One-way; only `logout` resets it.
    pub fn complete_onboarding(&mut self) {
        self.state.onboarding_seen = true;
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.persist();
    }

    pub fn set_alerts_enabled(&mut self, enabled: bool) {
        self.state.alerts_enabled = enabled;
        self.persist();
    }

    /// Full reset: identity, collections, preferences and both sticky
    /// flags all return to defaults, in memory and on disk.
    pub fn logout(&mut self) {
        self.state = SessionState::default();
        self.store.reset_to_default();
    }

    fn persist(&self) {
        self.store.save(&self.state);
    }
}

impl OutletRepository for SessionDb {
    fn outlets(&self) -> &[Outlet] {
        &self.state.outlets
    }

    fn outlet_by_id(&self, id: &OutletId) -> Option<&Outlet> {
        self.state.outlet_by_id(id)
    }

    fn add_outlet(&mut self, outlet: NewOutlet) -> Outlet {
        let outlet = Outlet {
            id: OutletId::generate(),
            name: outlet.name,
            address: outlet.address,
            campaign: outlet.campaign,
            _guard: (),
        };
        self.state.outlets.push(outlet.clone());
        self.persist();
        outlet
    }
}

impl CalculationRepository for SessionDb {
    fn calculations(&self) -> &[Calculation] {
        &self.state.calculations
    }

    fn calculation_by_id(&self, id: &CalculationId) -> Option<&Calculation> {
        self.state.calculation_by_id(id)
    }

    fn add_calculation(&mut self, calculation: NewCalculation) -> Calculation {
        let calculation = Calculation {
            id: self.state.next_calculation_id(),
            created_at: calculation::today_string(),
            articles: calculation.articles,
            _guard: (),
        };
        self.state.calculations.push(calculation.clone());
        self.persist();
        calculation
    }

    fn update_calculation(
        &mut self,
        id: &CalculationId,
        update: CalculationUpdate,
    ) -> Option<Calculation> {
        let calculation = self.state.calculations.iter_mut().find(|c| &c.id == id)?;
        if let Some(articles) = update.articles {
            calculation.articles = articles;
        }
        let updated = calculation.clone();
        self.persist();
        Some(updated)
    }

    fn delete_calculation(&mut self, id: &CalculationId) -> bool {
        let before = self.state.calculations.len();
        self.state.calculations.retain(|c| &c.id != id);
        if self.state.calculations.len() == before {
            return false;
        }
        self.persist();
        true
    }
}
