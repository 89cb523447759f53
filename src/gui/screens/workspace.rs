use std::fmt;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::session::{
        ArticleLine, CalculationForm, CalculationId, CalculationRepository, LoginForm, OutletForm,
        OutletId, OutletRepository, RegistrationForm, SessionState, Theme, VerificationCode,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{NavItem, layout, sidebar},
    },
    views::{
        calculations::CalculationsModel,
        dashboard::DashboardModel,
        onboarding::OnboardingFlow,
        outlet_details::OutletDetailsModel,
        outlets::OutletsModel,
        performance::{PerformanceModel, PerformanceView},
        settings::SettingsModel,
    },
};

/// The signed-in shell: sidebar navigation over the state projections,
/// forms, seeding and logout. Shows the auth flow first when the session
/// still belongs to the guest placeholder, and the onboarding tour until
/// it has been completed or skipped once.
#[derive(Debug, Clone)]
pub struct WorkspaceScreen {
    nav: NavItem,
    outlet_filter: String,
    calculation_filter: String,
    selected_outlet: Option<OutletId>,
    outlet_form: Option<OutletForm>,
    calculation_form: Option<CalculationForm>,
    performance_mode: PerformanceView,
    onboarding: Option<OnboardingFlow>,
    auth: Option<AuthFlow>,
}

#[derive(Debug, Clone)]
enum AuthFlow {
    Login(LoginForm),
    Register(RegistrationForm),
    Verify(VerificationCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Name,
    Pieces,
    Boxes,
    Bottles,
    Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutletChoice {
    id: OutletId,
    label: String,
}

impl fmt::Display for OutletChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub enum WorkspaceMessage {
    Navigate(NavItem),
    OutletFilterChanged(String),
    CalculationFilterChanged(String),
    SelectOutlet(OutletId),

    OpenOutletForm,
    OutletNameChanged(String),
    OutletAddressChanged(String),
    OutletCampaignChanged(String),
    SubmitOutletForm,
    CancelOutletForm,

    OpenCalculationForm,
    CalculationOutletPicked(OutletChoice),
    ArticleLineChanged(usize, ArticleField, String),
    AddArticleLine,
    RemoveArticleLine(usize),
    SubmitCalculationForm,
    CancelCalculationForm,
    DeleteCalculation(CalculationId),

    PerformanceViewChanged(PerformanceView),
    ThemeChanged(Theme),
    ToggleAlerts,
    SeedSample,
    Logout,

    LoginEmailChanged(String),
    SubmitLogin,
    GotoRegister,
    RegisterNameChanged(String),
    RegisterEmailChanged(String),
    SubmitRegistration,
    GotoLogin,
    VerificationChanged(String),
    SubmitVerification,

    OnboardingNext,
    OnboardingBack,
    OnboardingSkip,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    LoggedOut,
}

impl WorkspaceScreen {
    pub fn new(state: &SessionState) -> Self {
        Self {
            nav: NavItem::Overview,
            outlet_filter: String::new(),
            calculation_filter: String::new(),
            selected_outlet: None,
            outlet_form: None,
            calculation_form: None,
            performance_mode: PerformanceView::Cards,
            onboarding: OnboardingFlow::should_show(state).then(OnboardingFlow::start),
            auth: state
                .user
                .is_guest()
                .then(|| AuthFlow::Login(LoginForm::default())),
        }
    }
}

impl Screen for WorkspaceScreen {
    type Message = WorkspaceMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(session) = &state.session else {
            return container(text("No session open."))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };
        self.content(session.state()).map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let Some(session) = state.session.as_mut() else {
            return Task::none();
        };
        match message {
            WorkspaceMessage::Navigate(item) => self.nav = item,
            WorkspaceMessage::OutletFilterChanged(term) => self.outlet_filter = term,
            WorkspaceMessage::CalculationFilterChanged(term) => self.calculation_filter = term,
            WorkspaceMessage::SelectOutlet(id) => {
                self.selected_outlet = Some(id);
                self.nav = NavItem::OutletDetails;
            }

            WorkspaceMessage::OpenOutletForm => self.outlet_form = Some(OutletForm::default()),
            WorkspaceMessage::OutletNameChanged(value) => {
                if let Some(form) = &mut self.outlet_form {
                    form.name = value;
                }
            }
            WorkspaceMessage::OutletAddressChanged(value) => {
                if let Some(form) = &mut self.outlet_form {
                    form.address = value;
                }
            }
            WorkspaceMessage::OutletCampaignChanged(value) => {
                if let Some(form) = &mut self.outlet_form {
                    form.campaign = value;
                }
            }
            WorkspaceMessage::SubmitOutletForm => {
                // Incomplete forms simply stay open; no partial record exists.
                if let Some(outlet) = self.outlet_form.as_ref().and_then(OutletForm::validate) {
                    session.add_outlet(outlet);
                    self.outlet_form = None;
                }
            }
            WorkspaceMessage::CancelOutletForm => self.outlet_form = None,

            WorkspaceMessage::OpenCalculationForm => {
                self.calculation_form = Some(CalculationForm {
                    outlet: None,
                    articles: vec![ArticleLine::default()],
                });
            }
            WorkspaceMessage::CalculationOutletPicked(choice) => {
                if let Some(form) = &mut self.calculation_form {
                    form.outlet = Some(choice.id);
                }
            }
            WorkspaceMessage::ArticleLineChanged(index, field, value) => {
                if let Some(line) = self
                    .calculation_form
                    .as_mut()
                    .and_then(|form| form.articles.get_mut(index))
                {
                    match field {
                        ArticleField::Name => line.name = value,
                        ArticleField::Pieces => line.pieces = value,
                        ArticleField::Boxes => line.boxes = value,
                        ArticleField::Bottles => line.bottles = value,
                        ArticleField::Amount => line.amount = value,
                    }
                }
            }
            WorkspaceMessage::AddArticleLine => {
                if let Some(form) = &mut self.calculation_form {
                    form.articles.push(ArticleLine::default());
                }
            }
            WorkspaceMessage::RemoveArticleLine(index) => {
                if let Some(form) = &mut self.calculation_form {
                    if index < form.articles.len() {
                        form.articles.remove(index);
                    }
                }
            }
            WorkspaceMessage::SubmitCalculationForm => {
                if let Some(calculation) = self
                    .calculation_form
                    .as_ref()
                    .and_then(CalculationForm::validate)
                {
                    session.add_calculation(calculation);
                    self.calculation_form = None;
                }
            }
            WorkspaceMessage::CancelCalculationForm => self.calculation_form = None,
            WorkspaceMessage::DeleteCalculation(id) => {
                session.delete_calculation(&id);
            }

            WorkspaceMessage::PerformanceViewChanged(view) => self.performance_mode = view,
            WorkspaceMessage::ThemeChanged(theme) => session.set_theme(theme),
            WorkspaceMessage::ToggleAlerts => {
                let enabled = session.state().alerts_enabled;
                session.set_alerts_enabled(!enabled);
            }
            WorkspaceMessage::SeedSample => session.seed_sample_data(),
            WorkspaceMessage::Logout => {
                session.logout();
                return Task::done(ScreenMessage::ParentMessage(ParentMessage::LoggedOut));
            }

            WorkspaceMessage::LoginEmailChanged(value) => {
                if let Some(AuthFlow::Login(form)) = &mut self.auth {
                    form.email = value;
                }
            }
            WorkspaceMessage::SubmitLogin => {
                if let Some(AuthFlow::Login(form)) = &self.auth {
                    session.sign_in(form.submit());
                    session.seed_sample_data();
                    self.auth = None;
                }
            }
            WorkspaceMessage::GotoRegister => {
                self.auth = Some(AuthFlow::Register(RegistrationForm::default()));
            }
            WorkspaceMessage::RegisterNameChanged(value) => {
                if let Some(AuthFlow::Register(form)) = &mut self.auth {
                    form.name = value;
                }
            }
            WorkspaceMessage::RegisterEmailChanged(value) => {
                if let Some(AuthFlow::Register(form)) = &mut self.auth {
                    form.email = value;
                }
            }
            WorkspaceMessage::SubmitRegistration => {
                if let Some(AuthFlow::Register(form)) = &self.auth {
                    session.sign_in(form.submit());
                    self.auth = Some(AuthFlow::Verify(VerificationCode::default()));
                }
            }
            WorkspaceMessage::GotoLogin => {
                self.auth = Some(AuthFlow::Login(LoginForm::default()));
            }
            WorkspaceMessage::VerificationChanged(value) => {
                if let Some(AuthFlow::Verify(code)) = &mut self.auth {
                    let mut next = VerificationCode::default();
                    for ch in value.chars() {
                        next.push_digit(ch);
                    }
                    *code = next;
                }
            }
            WorkspaceMessage::SubmitVerification => {
                if let Some(AuthFlow::Verify(code)) = &self.auth {
                    if code.is_complete() {
                        session.seed_sample_data();
                        self.auth = None;
                    }
                }
            }

            WorkspaceMessage::OnboardingNext => {
                if let Some(flow) = &mut self.onboarding {
                    if flow.advance().is_some() {
                        session.complete_onboarding();
                        self.onboarding = None;
                    }
                }
            }
            WorkspaceMessage::OnboardingBack => {
                if let Some(flow) = &mut self.onboarding {
                    flow.back();
                }
            }
            WorkspaceMessage::OnboardingSkip => {
                if let Some(flow) = self.onboarding.take() {
                    flow.skip();
                    session.complete_onboarding();
                }
            }
        }
        Task::none()
    }
}

impl WorkspaceScreen {
    fn content<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        if let Some(auth) = &self.auth {
            return self.auth_view(state, auth);
        }

        let main: Element<'a, WorkspaceMessage> = if let Some(flow) = &self.onboarding {
            self.onboarding_view(flow)
        } else if let Some(form) = &self.outlet_form {
            self.outlet_form_view(form)
        } else if let Some(form) = &self.calculation_form {
            self.calculation_form_view(state, form)
        } else {
            match self.nav {
                NavItem::Overview => self.overview_view(state),
                NavItem::Outlets => self.outlets_view(state),
                NavItem::OutletDetails => self.outlet_details_view(state),
                NavItem::Calculations => self.calculations_view(state),
                NavItem::Performance => self.performance_view(state),
                NavItem::Settings => self.settings_view(state),
                NavItem::Help => self.help_view(),
            }
        };

        layout(
            sidebar(self.nav, WorkspaceMessage::Navigate),
            scrollable(main).height(Length::Fill),
        )
    }

    fn auth_view<'a>(
        &'a self,
        state: &'a SessionState,
        auth: &'a AuthFlow,
    ) -> Element<'a, WorkspaceMessage> {
        let card: Element<'a, WorkspaceMessage> = match auth {
            AuthFlow::Login(form) => column![
                text("Sign in to CCM HUB").size(28),
                text_input("Email", &form.email).on_input(WorkspaceMessage::LoginEmailChanged),
                row![
                    button("Sign In").on_press(WorkspaceMessage::SubmitLogin),
                    button("Create an account")
                        .style(button::text)
                        .on_press(WorkspaceMessage::GotoRegister),
                ]
                .spacing(12),
            ]
            .spacing(16)
            .into(),
            AuthFlow::Register(form) => column![
                text("Create your account").size(28),
                text_input("Name", &form.name).on_input(WorkspaceMessage::RegisterNameChanged),
                text_input("Email", &form.email).on_input(WorkspaceMessage::RegisterEmailChanged),
                row![
                    button("Register").on_press(WorkspaceMessage::SubmitRegistration),
                    button("Back to sign in")
                        .style(button::text)
                        .on_press(WorkspaceMessage::GotoLogin),
                ]
                .spacing(12),
            ]
            .spacing(16)
            .into(),
            AuthFlow::Verify(code) => {
                let verify = button("Verify");
                let verify = if code.is_complete() {
                    verify.on_press(WorkspaceMessage::SubmitVerification)
                } else {
                    verify
                };
                column![
                    text("Verify your email").size(28),
                    text(format!("We sent a 4-digit code to {}", state.user.email)),
                    text_input("Code", code.digits())
                        .on_input(WorkspaceMessage::VerificationChanged),
                    verify,
                ]
                .spacing(16)
                .into()
            }
        };
        container(container(card).padding(32).max_width(420))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn onboarding_view<'a>(&'a self, flow: &'a OnboardingFlow) -> Element<'a, WorkspaceMessage> {
        let back = button("Back");
        let back = if flow.step_number() > 1 {
            back.on_press(WorkspaceMessage::OnboardingBack)
        } else {
            back
        };
        let next_label = if flow.step_number() == flow.total_steps() {
            "Finish"
        } else {
            "Next"
        };
        container(
            column![
                text(format!(
                    "Step {} of {}",
                    flow.step_number(),
                    flow.total_steps()
                )),
                text(flow.title()).size(28),
                row![
                    back,
                    button(next_label).on_press(WorkspaceMessage::OnboardingNext),
                    button("Skip for now")
                        .style(button::text)
                        .on_press(WorkspaceMessage::OnboardingSkip),
                ]
                .spacing(12),
            ]
            .spacing(16)
            .align_x(Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn overview_view<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        let dashboard = DashboardModel::project(state);

        let stats = row![
            stat_card("Outlets", dashboard.outlet_count.to_string()),
            stat_card("Calculations", dashboard.calculation_count.to_string()),
            stat_card("Articles", dashboard.total_articles.to_string()),
        ]
        .spacing(16);

        let mut page = column![
            text(dashboard.hero_title).size(32),
            text(dashboard.hero_subtitle),
            stats,
        ]
        .spacing(16);

        if dashboard.is_empty {
            page = page.push(text("No Outlets Yet")).push(
                row![
                    button("Create an Outlet").on_press(WorkspaceMessage::OpenOutletForm),
                    button("Load Sample Data")
                        .style(button::secondary)
                        .on_press(WorkspaceMessage::SeedSample),
                ]
                .spacing(12),
            );
        } else {
            let mut recent = column![text("Recent outlets").size(20)].spacing(8);
            for outlet in dashboard.recent_outlets {
                recent = recent.push(
                    row![
                        text(outlet.name).width(Length::FillPortion(1)),
                        text(outlet.address).width(Length::FillPortion(2)),
                        text(outlet.campaign).width(Length::FillPortion(1)),
                    ]
                    .spacing(12),
                );
            }
            page = page.push(recent);
        }

        page.into()
    }

    fn outlets_view<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        let model = OutletsModel::project(state, &self.outlet_filter);

        let mut rows = column![].spacing(8);
        for outlet in model.rows {
            let id = outlet.id.clone();
            rows = rows.push(
                row![
                    text(outlet.name).width(Length::FillPortion(1)),
                    text(outlet.address).width(Length::FillPortion(2)),
                    text(outlet.campaign).width(Length::FillPortion(1)),
                    text("Active").width(Length::FillPortion(1)),
                    button("View Details").on_press(WorkspaceMessage::SelectOutlet(id)),
                ]
                .spacing(12)
                .align_y(Center),
            );
        }

        column![
            text("Outlets").size(32),
            row![
                text_input("Search outlets...", &self.outlet_filter)
                    .on_input(WorkspaceMessage::OutletFilterChanged),
                button("Create Outlet").on_press(WorkspaceMessage::OpenOutletForm),
            ]
            .spacing(12),
            rows,
            text(model.count_label),
        ]
        .spacing(16)
        .into()
    }

    fn outlet_details_view<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        let model = OutletDetailsModel::project(state, self.selected_outlet.as_ref());
        column![
            text(model.title).size(32),
            detail_row("Campaign", model.campaign),
            detail_row("Address", model.address),
            detail_row("Status", model.status),
        ]
        .spacing(12)
        .into()
    }

    fn calculations_view<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        let model = CalculationsModel::project(state, &self.calculation_filter);

        let mut rows = column![].spacing(8);
        for calculation in model.rows {
            let id = calculation.id.clone();
            rows = rows.push(
                row![
                    text(calculation.id.to_string()).width(Length::FillPortion(1)),
                    text(calculation.created_at).width(Length::FillPortion(1)),
                    text(calculation.articles.to_string()).width(Length::FillPortion(1)),
                    button("Delete")
                        .style(button::danger)
                        .on_press(WorkspaceMessage::DeleteCalculation(id)),
                ]
                .spacing(12)
                .align_y(Center),
            );
        }

        column![
            text("Calculations").size(32),
            text("Manage and view all your inventory calculations."),
            row![
                text_input("Search calculations...", &self.calculation_filter)
                    .on_input(WorkspaceMessage::CalculationFilterChanged),
                button("New Calculation").on_press(WorkspaceMessage::OpenCalculationForm),
            ]
            .spacing(12),
            rows,
            text(model.count_label),
        ]
        .spacing(16)
        .into()
    }

    fn performance_view<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        let model = PerformanceModel::project(state, self.performance_mode);

        let toggles = row![
            button("Cards").on_press(WorkspaceMessage::PerformanceViewChanged(
                PerformanceView::Cards
            )),
            button("Table").on_press(WorkspaceMessage::PerformanceViewChanged(
                PerformanceView::Table
            )),
        ]
        .spacing(8);

        let body: Element<'a, WorkspaceMessage> = if !model.has_data {
            column![
                text("No performance data yet"),
                text("Once your outlets and services are active, you'll see performance stats here."),
            ]
            .spacing(8)
            .into()
        } else {
            match model.view {
                PerformanceView::Cards => {
                    let mut cards = row![].spacing(12);
                    for name in model.outlet_names {
                        cards = cards.push(container(text(name)).padding(16));
                    }
                    cards.into()
                }
                PerformanceView::Table => {
                    let mut table = column![].spacing(8);
                    for name in model.outlet_names {
                        table = table.push(text(name));
                    }
                    table.into()
                }
            }
        };

        column![text("Performance").size(32), toggles, body]
            .spacing(16)
            .into()
    }

    fn settings_view<'a>(&'a self, state: &'a SessionState) -> Element<'a, WorkspaceMessage> {
        let model = SettingsModel::project(state);
        column![
            text("Settings").size(32),
            detail_row("Name", model.profile.name),
            detail_row("Email", model.profile.email),
            row![
                text("Theme").width(Length::FillPortion(1)),
                button("Light").on_press(WorkspaceMessage::ThemeChanged(Theme::Light)),
                button("Dark").on_press(WorkspaceMessage::ThemeChanged(Theme::Dark)),
            ]
            .spacing(8)
            .align_y(Center),
            row![
                text("Alerts").width(Length::FillPortion(1)),
                button(text(model.alerts_label)).on_press(WorkspaceMessage::ToggleAlerts),
            ]
            .spacing(8)
            .align_y(Center),
            button("Log Out")
                .style(button::danger)
                .on_press(WorkspaceMessage::Logout),
        ]
        .spacing(12)
        .into()
    }

    fn help_view<'a>(&'a self) -> Element<'a, WorkspaceMessage> {
        column![
            text("Help").size(32),
            text("Sign in, create your first outlet, and explore the dashboard."),
            text("Use the Outlets page to manage locations and the Calculations page to track inventory."),
        ]
        .spacing(12)
        .into()
    }

    fn outlet_form_view<'a>(&'a self, form: &'a OutletForm) -> Element<'a, WorkspaceMessage> {
        let save = button("Create Outlet");
        let save = if form.validate().is_some() {
            save.on_press(WorkspaceMessage::SubmitOutletForm)
        } else {
            save
        };
        container(
            column![
                text("Create Outlet").size(28),
                text_input("Name", &form.name).on_input(WorkspaceMessage::OutletNameChanged),
                text_input("Address", &form.address)
                    .on_input(WorkspaceMessage::OutletAddressChanged),
                text_input("Campaign", &form.campaign)
                    .on_input(WorkspaceMessage::OutletCampaignChanged),
                row![
                    save,
                    button("Cancel")
                        .style(button::text)
                        .on_press(WorkspaceMessage::CancelOutletForm),
                ]
                .spacing(12),
            ]
            .spacing(12),
        )
        .max_width(480)
        .center_x(Length::Fill)
        .into()
    }

    fn calculation_form_view<'a>(
        &'a self,
        state: &'a SessionState,
        form: &'a CalculationForm,
    ) -> Element<'a, WorkspaceMessage> {
        let choices: Vec<OutletChoice> = state
            .outlets
            .iter()
            .map(|outlet| OutletChoice {
                id: outlet.id.clone(),
                label: format!("{} - {}", outlet.name, outlet.address),
            })
            .collect();
        let selected = form
            .outlet
            .as_ref()
            .and_then(|id| choices.iter().find(|choice| &choice.id == id).cloned());

        if choices.is_empty() {
            return column![
                text("New Calculation").size(28),
                text("Please create an outlet before adding a new calculation."),
                button("Close").on_press(WorkspaceMessage::CancelCalculationForm),
            ]
            .spacing(12)
            .into();
        }

        let mut lines = column![].spacing(8);
        for (index, line) in form.articles.iter().enumerate() {
            lines = lines.push(
                row![
                    text_input("Article", &line.name).on_input(move |value| {
                        WorkspaceMessage::ArticleLineChanged(index, ArticleField::Name, value)
                    }),
                    text_input("Pieces", &line.pieces).on_input(move |value| {
                        WorkspaceMessage::ArticleLineChanged(index, ArticleField::Pieces, value)
                    }),
                    text_input("Boxes", &line.boxes).on_input(move |value| {
                        WorkspaceMessage::ArticleLineChanged(index, ArticleField::Boxes, value)
                    }),
                    text_input("Bottles", &line.bottles).on_input(move |value| {
                        WorkspaceMessage::ArticleLineChanged(index, ArticleField::Bottles, value)
                    }),
                    text_input("Amount", &line.amount).on_input(move |value| {
                        WorkspaceMessage::ArticleLineChanged(index, ArticleField::Amount, value)
                    }),
                    button("Remove").on_press(WorkspaceMessage::RemoveArticleLine(index)),
                ]
                .spacing(8),
            );
        }

        let totals = form.totals();
        let save = button("Save Calculation");
        let save = if form.validate().is_some() {
            save.on_press(WorkspaceMessage::SubmitCalculationForm)
        } else {
            save
        };

        column![
            text("New Calculation").size(28),
            text("Create a new calculation for one of your outlets."),
            pick_list(choices, selected, WorkspaceMessage::CalculationOutletPicked)
                .placeholder("Choose an outlet..."),
            lines,
            button("Add Article").on_press(WorkspaceMessage::AddArticleLine),
            text(format!(
                "Totals: {} pieces, {} boxes, {} bottles, {:.2}",
                totals.pieces, totals.boxes, totals.bottles, totals.amount
            )),
            row![
                save,
                button("Cancel")
                    .style(button::text)
                    .on_press(WorkspaceMessage::CancelCalculationForm),
            ]
            .spacing(12),
        ]
        .spacing(12)
        .into()
    }
}

fn stat_card<'a>(label: &'a str, value: String) -> Element<'a, WorkspaceMessage> {
    container(column![text(value).size(28), text(label)].spacing(4))
        .padding(16)
        .width(Length::FillPortion(1))
        .into()
}

fn detail_row<'a>(label: &'a str, value: String) -> Element<'a, WorkspaceMessage> {
    row![
        text(label).width(Length::FillPortion(1)),
        text(value).width(Length::FillPortion(3)),
    ]
    .spacing(8)
    .into()
}
