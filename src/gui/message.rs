use crate::core::session::SessionDb;
use crate::gui::screens::{
    ScreenData, ScreenMessage, landing_page::LandingPageScreen, loading_page::LoadingPageScreen,
    workspace::WorkspaceScreen,
};

#[derive(Debug)]
pub enum Message {
    LandingPage(ScreenMessage<LandingPageScreen>),
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    Workspace(ScreenMessage<WorkspaceScreen>),
    ChangeScreen(ScreenData),
    SessionLoaded(SessionDb, WorkspaceScreen),
}
