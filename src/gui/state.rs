use crate::core::session::SessionDb;

#[derive(Debug, Default)]
pub struct AppState {
    pub session: Option<SessionDb>,
}
