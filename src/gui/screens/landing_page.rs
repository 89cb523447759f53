use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, row, text},
};
use rfd::AsyncFileDialog;

use crate::DEFAULT_SESSION_FILE;
use crate::core::session::SessionStore;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Entry screen. A session can be picked from disk, started fresh, or
/// resumed from the default file in the working directory. Starting fresh
/// writes the default record before the workspace opens, so the chosen
/// path holds a real session from the first moment.
#[derive(Debug, Clone)]
pub struct LandingPageScreen {
    default_path: PathBuf,
}

impl LandingPageScreen {
    pub fn new(default_path: PathBuf) -> Self {
        Self { default_path }
    }
}

#[derive(Debug, Clone)]
pub enum LandingPageMessage {
    PickExisting,
    StartNew,
    UseDefault,
    DialogDismissed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenedSession(PathBuf),
}

fn session_dialog() -> AsyncFileDialog {
    AsyncFileDialog::new().add_filter("CCM HUB Session", &["json"])
}

fn opened_or_dismissed(path: Option<PathBuf>) -> ScreenMessage<LandingPageScreen> {
    match path {
        Some(path) => ScreenMessage::ParentMessage(ParentMessage::OpenedSession(path)),
        None => ScreenMessage::ScreenMessage(LandingPageMessage::DialogDismissed),
    }
}

impl Screen for LandingPageScreen {
    type Message = LandingPageMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let resume = format!("Continue with {}", self.default_path.display());
        let content = column![
            text("CCM HUB").size(32),
            text("Outlet Management Dashboard"),
            row![
                button("Open Session...").on_press(ScreenMessage::ScreenMessage(
                    LandingPageMessage::PickExisting
                )),
                button("New Session...")
                    .style(button::secondary)
                    .on_press(ScreenMessage::ScreenMessage(LandingPageMessage::StartNew)),
            ]
            .spacing(20),
            button(text(resume))
                .style(button::text)
                .on_press(ScreenMessage::ScreenMessage(LandingPageMessage::UseDefault)),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LandingPageMessage::PickExisting => Task::perform(
                async { Some(session_dialog().pick_file().await?.path().to_path_buf()) },
                opened_or_dismissed,
            ),
            LandingPageMessage::StartNew => Task::perform(
                async {
                    let handle = session_dialog()
                        .set_title("New CCM HUB Session")
                        .set_file_name(DEFAULT_SESSION_FILE)
                        .save_file()
                        .await?;
                    let path = handle.path().to_path_buf();
                    SessionStore::new(&path).reset_to_default();
                    Some(path)
                },
                opened_or_dismissed,
            ),
            LandingPageMessage::UseDefault => Task::done(ScreenMessage::ParentMessage(
                ParentMessage::OpenedSession(self.default_path.clone()),
            )),
            LandingPageMessage::DialogDismissed => Task::none(),
        }
    }
}
