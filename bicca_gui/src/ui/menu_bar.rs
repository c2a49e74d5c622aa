//! Menu bar
//!
//! File, Home, Reports and Help titles. Clicking a title opens its dropdown
//! (drawn as an overlay by [`view_menu_dropdown`]); clicking it again closes
//! it. Home and Reports have no entries yet.

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length, Padding};

use super::shared::style::MUTED;
use crate::Message;

/// Width of each menu title, so dropdowns line up under their title
const TITLE_WIDTH: f32 = 90.0;
/// Height of the menu bar row
const BAR_HEIGHT: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Home,
    Reports,
    Help,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::File, Menu::Home, Menu::Reports, Menu::Help];

    pub fn title(&self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Home => "Home",
            Menu::Reports => "Reports",
            Menu::Help => "Help",
        }
    }

    pub fn actions(&self) -> &'static [MenuAction] {
        match self {
            Menu::File => &[
                MenuAction::New,
                MenuAction::Open,
                MenuAction::Save,
                MenuAction::SaveAs,
                MenuAction::CreateCopy,
                MenuAction::Print,
                MenuAction::Rename,
                MenuAction::Export,
                MenuAction::VersionHistory,
                MenuAction::Info,
            ],
            Menu::Home | Menu::Reports => &[],
            Menu::Help => &[
                MenuAction::ContactUs,
                MenuAction::Feedback,
                MenuAction::VideoTutorials,
                MenuAction::JoinCommunity,
            ],
        }
    }

    fn position(&self) -> usize {
        Menu::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

/// Menu and toolbar commands. None of them has a handler yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Open,
    Save,
    SaveAs,
    CreateCopy,
    Print,
    Rename,
    Export,
    VersionHistory,
    Info,
    ContactUs,
    Feedback,
    VideoTutorials,
    JoinCommunity,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::New => "New",
            MenuAction::Open => "Open",
            MenuAction::Save => "Save",
            MenuAction::SaveAs => "Save As...",
            MenuAction::CreateCopy => "Create a Copy",
            MenuAction::Print => "Print",
            MenuAction::Rename => "Rename",
            MenuAction::Export => "Export",
            MenuAction::VersionHistory => "Version History",
            MenuAction::Info => "Info",
            MenuAction::ContactUs => "Contact Us",
            MenuAction::Feedback => "Feedback",
            MenuAction::VideoTutorials => "Video Tutorials",
            MenuAction::JoinCommunity => "Join our Community",
        }
    }
}

/// Render the row of menu titles
pub fn view_menu_bar(open: Option<Menu>) -> Element<'static, Message> {
    let mut bar = row![];

    for menu in Menu::ALL {
        let style = if open == Some(menu) { button::secondary } else { button::text };
        bar = bar.push(
            button(text(menu.title()).size(12))
                .on_press(Message::ToggleMenu(menu))
                .width(Length::Fixed(TITLE_WIDTH))
                .height(Length::Fixed(BAR_HEIGHT))
                .style(style),
        );
    }

    container(bar)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Render the dropdown of an open menu, positioned under its title
pub fn view_menu_dropdown(menu: Menu) -> Element<'static, Message> {
    let mut entries: Column<'_, Message> = column![].spacing(2).width(Length::Fixed(170.0));

    for action in menu.actions() {
        entries = entries.push(
            button(text(action.label()).size(11))
                .on_press(Message::MenuAction(*action))
                .padding(Padding::from([4, 12]))
                .width(Length::Fill)
                .style(button::text),
        );
    }

    if menu.actions().is_empty() {
        entries = entries.push(
            container(text("(empty)").size(11).color(MUTED)).padding(Padding::from([4, 12])),
        );
    }

    let dropdown = container(entries).padding(4).style(container::bordered_box);

    column![
        Space::new().height(BAR_HEIGHT),
        row![Space::new().width(TITLE_WIDTH * menu.position() as f32), dropdown],
    ]
    .into()
}
