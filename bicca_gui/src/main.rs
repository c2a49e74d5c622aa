//! # BICCA Studio GUI Application
//!
//! Main window for entering construction-project valuation data.
//! Built with the Iced framework; all window state lives in
//! [`bicca_core::Session`] and this crate only renders it and turns widget
//! events into [`Message`]s.

mod ui;
mod update;

use iced::widget::{column, container, row, stack, text_editor};
use iced::{Element, Length, Size, Subscription, Task, Theme};
use tracing_subscriber::EnvFilter;

use bicca_core::dialogs::CategoryDialog;
use bicca_core::panels::{DynamicPanel, Tab};
use bicca_core::project::{GeneralField, LookupCategory};
use bicca_core::sections::{Group, SubGroup};
use bicca_core::{Session, ShellConfig};

use ui::menu_bar::{Menu, MenuAction};

/// Every event the window can produce.
#[derive(Debug, Clone)]
pub enum Message {
    // Menu bar and toolbar
    ToggleMenu(Menu),
    MenuAction(MenuAction),

    // Window tabs and panel headers
    TabClicked(Tab),
    CloseTutorials,
    CloseProjectDetails,

    // Tutorials panel
    TutorialNext,
    TutorialBack,

    // Project Details panel
    ToggleGroup(Group),
    ToggleSubGroup(SubGroup),
    GeneralFieldChanged(GeneralField, String),
    DescriptionEdited(text_editor::Action),
    CountrySelected(&'static str),

    // Category dialogs
    OpenDialog(CategoryDialog),
    DialogFieldNameChanged(String),
    DialogFieldValueChanged(String),
    DialogAddField,
    DialogRemoveField(String),
    DialogSave,
    DialogCancel,

    // Status bar data look-up
    LookupSelected(LookupCategory),
    LookupQueryChanged(String),
    LookupSearch,

    WindowResized(Size),
}

impl Message {
    /// Messages still handled while a category dialog is open
    fn passes_modal(&self) -> bool {
        matches!(
            self,
            Message::DialogFieldNameChanged(_)
                | Message::DialogFieldValueChanged(_)
                | Message::DialogAddField
                | Message::DialogRemoveField(_)
                | Message::DialogSave
                | Message::DialogCancel
                | Message::WindowResized(_)
        )
    }

    /// Messages that leave an open dropdown menu in place; any other
    /// interaction dismisses it
    fn keeps_menu_open(&self) -> bool {
        matches!(self, Message::ToggleMenu(_) | Message::WindowResized(_))
    }
}

pub struct App {
    pub session: Session,
    /// Multi-line editor backing the Project Description field
    pub description: text_editor::Content,
    pub open_menu: Option<Menu>,
    /// Pending "add field" inputs of the open dialog
    pub new_field_name: String,
    pub new_field_value: String,
    pub status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let session = Session::new(ShellConfig::default());
        let app = App {
            description: text_editor::Content::with_text(&session.general.project_description),
            session,
            open_menu: None,
            new_field_name: String::new(),
            new_field_value: String::new(),
            status: "Ready".to_string(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.session.config.window_title.clone()
    }

    fn theme(&self) -> Theme {
        if self.session.config.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    fn view(&self) -> Element<'_, Message> {
        let layout = column![
            ui::menu_bar::view_menu_bar(self.open_menu),
            ui::toolbar::view_toolbar(),
            ui::window_tabs::view_window_tabs(&self.session.panels),
            self.view_split(),
            ui::status_bar::view_status_bar(
                self.session.lookup,
                &self.session.lookup_query,
                &self.status,
            ),
        ];

        let base: Element<'_, Message> = container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if let Some(dialog) = self.session.dialogs.current() {
            stack![
                base,
                ui::modal::view_backdrop(),
                ui::modal::view_dialog(dialog, &self.new_field_name, &self.new_field_value),
            ]
            .into()
        } else if let Some(menu) = self.open_menu {
            stack![base, ui::menu_bar::view_menu_dropdown(menu)].into()
        } else {
            base
        }
    }

    /// Tutorials region on the left, dynamic region filling the rest
    fn view_split(&self) -> Element<'_, Message> {
        let layout = self.session.split_layout();
        let mut split = row![].spacing(1).height(Length::Fill);

        if let Some(width) = layout.tutorials_width {
            split = split.push(
                container(ui::tutorials_panel::view(&self.session.tutorial))
                    .width(Length::Fixed(width))
                    .height(Length::Fill),
            );
        }

        if let Some(dynamic) = layout.dynamic {
            let panel = match dynamic {
                DynamicPanel::ProjectDetails => ui::project_panel::view(self),
                DynamicPanel::Results => ui::results_panel::view_results(),
                DynamicPanel::Compare => ui::results_panel::view_compare(),
            };
            split = split.push(container(panel).width(Length::Fill).height(Length::Fill));
        }

        split.into()
    }
}

fn init_logging(config: &ShellConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .try_init();
}

fn main() -> iced::Result {
    let config = ShellConfig::default();
    init_logging(&config);
    tracing::info!(title = %config.window_title, "starting BICCA Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(Size::new(config.window_width, config.window_height))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_messages_dismiss_menu() {
        let dismissing = [
            Message::MenuAction(MenuAction::Save),
            Message::TabClicked(Tab::Results),
            Message::CloseTutorials,
            Message::CloseProjectDetails,
            Message::TutorialNext,
            Message::TutorialBack,
            Message::ToggleGroup(Group::GeneralInformation),
            Message::ToggleSubGroup(SubGroup::StructureWorks),
            Message::GeneralFieldChanged(GeneralField::CompanyName, "Acme".to_string()),
            Message::CountrySelected("Kenya"),
            Message::OpenDialog(CategoryDialog::Financial),
            Message::LookupSelected(LookupCategory::RecyclingData),
            Message::LookupQueryChanged("steel".to_string()),
            Message::LookupSearch,
        ];
        for message in dismissing {
            assert!(!message.keeps_menu_open(), "{message:?} should close the menu");
        }

        assert!(Message::ToggleMenu(Menu::File).keeps_menu_open());
        assert!(Message::WindowResized(Size::new(800.0, 600.0)).keeps_menu_open());
    }

    #[test]
    fn test_only_dialog_messages_pass_modal() {
        assert!(Message::DialogSave.passes_modal());
        assert!(Message::DialogCancel.passes_modal());
        assert!(Message::DialogRemoveField("rate".to_string()).passes_modal());
        assert!(!Message::TabClicked(Tab::Compare).passes_modal());
        assert!(!Message::ToggleMenu(Menu::Help).passes_modal());
        assert!(!Message::OpenDialog(CategoryDialog::Foundation).passes_modal());
    }
}
