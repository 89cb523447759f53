pub mod core;
pub mod views;

pub use crate::core::session::{SessionDb, SessionState, SessionStore};

/// Session file used when no path is given on the command line.
pub const DEFAULT_SESSION_FILE: &str = "ccmhub_state.json";

#[cfg(feature = "gui")]
pub mod gui;
