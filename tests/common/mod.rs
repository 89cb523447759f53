mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from ccmhub for tests
pub use ccmhub::core::session::{
    Calculation, CalculationForm, CalculationId, CalculationRepository, CalculationUpdate,
    LoginForm, NewCalculation, NewOutlet, Outlet, OutletForm, OutletId, OutletRepository,
    RegistrationForm, SessionDb, SessionState, SessionStore, Theme, UserProfile,
    VerificationCode, seed_sample_data,
};
