pub mod landing_page;
pub mod loading_page;
pub mod workspace;

use iced::{Element, Task};

use crate::{
    core::session::SessionDb,
    gui::{AppState, Message},
};

#[derive(Debug)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

// Manual impl: Clone only when both message types are, which the
// screen-dispatching `ScreenData` message is not.
impl<S: Screen> Clone for ScreenMessage<S>
where
    S::Message: Clone,
    S::ParentMessage: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::ScreenMessage(msg) => Self::ScreenMessage(msg.clone()),
            Self::ParentMessage(msg) => Self::ParentMessage(msg.clone()),
        }
    }
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LandingPage(landing_page::LandingPageScreen),
    LoadingPage(loading_page::LoadingPageScreen),
    Workspace(workspace::WorkspaceScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::LandingPage(screen) => screen.view(state).map(Message::LandingPage),
            ScreenData::LoadingPage(screen) => screen.view(state).map(Message::LoadingPage),
            ScreenData::Workspace(screen) => screen.view(state).map(Message::Workspace),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (screen, Message::ChangeScreen(next)) => {
                *screen = next;
                Task::none()
            }
            (screen, Message::SessionLoaded(session, workspace)) => {
                state.session = Some(session);
                *screen = ScreenData::Workspace(workspace);
                Task::none()
            }
            (ScreenData::LandingPage(page), Message::LandingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::LandingPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    landing_page::ParentMessage::OpenedSession(path) => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::LoadingPage(loading_page::LoadingPageScreen),
                        )))
                        .chain(Task::perform(
                            async move {
                                let session = SessionDb::open(&path);
                                let workspace =
                                    workspace::WorkspaceScreen::new(session.state());
                                (session, workspace)
                            },
                            |(session, workspace)| {
                                ScreenMessage::ScreenMessage(Message::SessionLoaded(
                                    session, workspace,
                                ))
                            },
                        ))
                    }
                },
            },
            (ScreenData::Workspace(page), Message::Workspace(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Workspace)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    workspace::ParentMessage::LoggedOut => {
                        state.session = None;
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::LandingPage(landing_page::LandingPageScreen::new(
                                std::path::PathBuf::from(crate::DEFAULT_SESSION_FILE),
                            )),
                        )))
                    }
                },
            },
            _ => Task::none(),
        }
    }
}
