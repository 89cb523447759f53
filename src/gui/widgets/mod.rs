use iced::{
    Element, Length,
    widget::{button, column, container, row, text},
};

/// Sidebar navigation entries of the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Overview,
    Outlets,
    OutletDetails,
    Calculations,
    Performance,
    Settings,
    Help,
}

impl NavItem {
    pub const ALL: [NavItem; 7] = [
        NavItem::Overview,
        NavItem::Outlets,
        NavItem::OutletDetails,
        NavItem::Calculations,
        NavItem::Performance,
        NavItem::Settings,
        NavItem::Help,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Overview => "Overview",
            NavItem::Outlets => "Outlets",
            NavItem::OutletDetails => "Outlet Details",
            NavItem::Calculations => "Calculations",
            NavItem::Performance => "Performance",
            NavItem::Settings => "Settings",
            NavItem::Help => "Help",
        }
    }
}

pub fn sidebar<'a, Message: Clone + 'a>(
    active: NavItem,
    on_select: impl Fn(NavItem) -> Message,
) -> Element<'a, Message> {
    let mut items = column![].spacing(4);
    for item in NavItem::ALL {
        let style = if item == active {
            button::primary
        } else {
            button::text
        };
        items = items.push(
            button(text(item.label()))
                .style(style)
                .width(Length::Fill)
                .on_press(on_select(item)),
        );
    }
    container(column![text("CCM HUB").size(24), items].spacing(24))
        .padding(16)
        .height(Length::Fill)
        .into()
}

pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(sidebar.into())
            .width(Length::FillPortion(1))
            .height(Length::Fill),
        container(main_content.into())
            .width(Length::FillPortion(4))
            .height(Length::Fill)
            .padding(24),
    ])
    .into()
}
