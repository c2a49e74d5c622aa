//! Message handling.
//!
//! Every widget event lands in [`App::update`], which forwards it to the
//! matching [`bicca_core::Session`] operation. While a category dialog is
//! open, only dialog messages (and window resizes) get through. Any message
//! other than a menu toggle or a resize closes an open dropdown menu.

use chrono::Local;
use iced::Task;
use tracing::{debug, info};

use bicca_core::dialogs::Outcome;
use bicca_core::panels::PanelEvent;
use bicca_core::project::GeneralField;
use bicca_core::sections::SectionEvent;
use bicca_core::FieldValue;

use crate::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if self.session.dialogs.is_open() && !message.passes_modal() {
            debug!(?message, "ignored while dialog is open");
            return Task::none();
        }

        if !message.keeps_menu_open() {
            self.open_menu = None;
        }

        match message {
            Message::ToggleMenu(menu) => {
                self.open_menu = if self.open_menu == Some(menu) { None } else { Some(menu) };
            }
            Message::MenuAction(action) => {
                info!(action = action.label(), "menu action has no handler yet");
            }

            Message::TabClicked(tab) => {
                self.session.handle_panel(PanelEvent::TabClicked(tab));
            }
            Message::CloseTutorials => {
                self.session.handle_panel(PanelEvent::CloseTutorials);
            }
            Message::CloseProjectDetails => {
                self.session.handle_panel(PanelEvent::CloseDynamic);
            }

            Message::TutorialNext => {
                if self.session.tutorial.next() {
                    debug!(page = self.session.tutorial.current_page(), "tutorial page");
                }
            }
            Message::TutorialBack => {
                if self.session.tutorial.back() {
                    debug!(page = self.session.tutorial.current_page(), "tutorial page");
                }
            }

            Message::ToggleGroup(group) => {
                self.session.handle_section(SectionEvent::ToggleGroup(group));
            }
            Message::ToggleSubGroup(sub) => {
                self.session.handle_section(SectionEvent::ToggleSubGroup(sub));
            }
            Message::GeneralFieldChanged(field, value) => {
                self.session.general.set(field, value);
            }
            Message::DescriptionEdited(action) => {
                self.description.perform(action);
                self.session
                    .general
                    .set(GeneralField::ProjectDescription, self.description.text());
            }
            Message::CountrySelected(country) => {
                self.session.general.set(GeneralField::Country, country);
            }

            Message::OpenDialog(kind) => {
                if self.session.launch_dialog(kind) {
                    self.new_field_name.clear();
                    self.new_field_value.clear();
                }
            }
            Message::DialogFieldNameChanged(name) => {
                self.new_field_name = name;
            }
            Message::DialogFieldValueChanged(value) => {
                self.new_field_value = value;
            }
            Message::DialogAddField => {
                if let Some(dialog) = self.session.dialogs.current_mut() {
                    let value = FieldValue::parse_lenient(&self.new_field_value);
                    if dialog.set_field(&self.new_field_name, value) {
                        self.new_field_name.clear();
                        self.new_field_value.clear();
                    }
                }
            }
            Message::DialogRemoveField(name) => {
                if let Some(dialog) = self.session.dialogs.current_mut() {
                    dialog.remove_field(&name);
                }
            }
            Message::DialogSave => {
                if let Some(kind) = self.session.close_dialog(Outcome::Save) {
                    let saved_at = self
                        .session
                        .store
                        .last_saved(kind.window_name())
                        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
                        .unwrap_or_default();
                    info!(window = kind.window_name(), "form data saved");
                    self.status = format!("Saved {} at {}", kind.window_name(), saved_at);
                }
            }
            Message::DialogCancel => {
                self.session.close_dialog(Outcome::Discard);
            }

            Message::LookupSelected(category) => {
                self.session.lookup = category;
            }
            Message::LookupQueryChanged(query) => {
                self.session.lookup_query = query;
            }
            Message::LookupSearch => {
                info!(
                    category = self.session.lookup.label(),
                    query = %self.session.lookup_query,
                    "data look-up has no source yet"
                );
            }

            Message::WindowResized(size) => {
                self.session.resize(size.width);
            }
        }

        Task::none()
    }
}
