use std::path::PathBuf;

use iced::{Element, Task, Theme};

use crate::core::session::{SessionDb, Theme as SessionTheme};
use crate::gui::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, landing_page, loading_page, workspace},
};

pub struct CcmHubApp {
    state: AppState,
    screen: ScreenData,
}

/// Launch the shell. With a preselected session file the landing page is
/// skipped and the workspace opens directly.
pub fn run(session_file: Option<PathBuf>) -> iced::Result {
    iced::application(
        move || CcmHubApp::new(session_file.clone()),
        CcmHubApp::update,
        CcmHubApp::view,
    )
    .title("CCM HUB - Outlet Management")
    .theme(CcmHubApp::theme)
    .run()
}

impl CcmHubApp {
    fn new(session_file: Option<PathBuf>) -> (Self, Task<Message>) {
        match session_file {
            Some(path) => (
                Self {
                    state: AppState::default(),
                    screen: ScreenData::LoadingPage(loading_page::LoadingPageScreen),
                },
                Task::perform(
                    async move {
                        let session = SessionDb::open(&path);
                        let screen = workspace::WorkspaceScreen::new(session.state());
                        (session, screen)
                    },
                    |(session, screen)| Message::SessionLoaded(session, screen),
                ),
            ),
            None => (
                Self {
                    state: AppState::default(),
                    screen: ScreenData::LandingPage(landing_page::LandingPageScreen::new(
                        PathBuf::from(crate::DEFAULT_SESSION_FILE),
                    )),
                },
                Task::none(),
            ),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    fn theme(&self) -> Theme {
        match self.state.session.as_ref().map(|s| s.state().theme) {
            Some(SessionTheme::Dark) => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
