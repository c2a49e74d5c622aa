//! Category dialog overlay
//!
//! The open dialog is drawn above a semi-transparent backdrop. The real
//! dialog layouts are defined elsewhere; until they are wired in, each
//! dialog is a generic field/value editor over its saved record.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use bicca_core::dialogs::OpenDialog;

use super::shared::style::MUTED;
use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::DialogCancel)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the open category dialog
pub fn view_dialog<'a>(
    dialog: &'a OpenDialog,
    new_name: &'a str,
    new_value: &'a str,
) -> Element<'a, Message> {
    let kind = dialog.kind();
    let title = text(kind.title()).size(18);

    let description = text(format!(
        "Values are kept for this session under \"{}\".",
        kind.window_name()
    ))
    .size(11)
    .color(MUTED);

    let mut rows: Column<'_, Message> = column![].spacing(4);
    for (name, value) in dialog.fields() {
        rows = rows.push(
            row![
                text(name.as_str()).size(11).width(Length::Fixed(160.0)),
                text(value.to_string()).size(11).width(Length::Fill),
                button(text("Remove").size(10))
                    .on_press(Message::DialogRemoveField(name.clone()))
                    .padding(Padding::from([2, 6]))
                    .style(button::secondary),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        );
    }
    if dialog.fields().is_empty() {
        rows = rows.push(text("(no values entered)").size(11).color(MUTED));
    }

    let add_row = row![
        text_input("Field name", new_name)
            .on_input(Message::DialogFieldNameChanged)
            .width(Length::Fixed(160.0))
            .padding(4)
            .size(11),
        text_input("Value", new_value)
            .on_input(Message::DialogFieldValueChanged)
            .on_submit(Message::DialogAddField)
            .width(Length::Fill)
            .padding(4)
            .size(11),
        button(text("Add").size(11))
            .on_press(Message::DialogAddField)
            .padding(Padding::from([4, 10]))
            .style(button::secondary),
    ]
    .spacing(6)
    .align_y(Alignment::Center);

    let buttons = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(11))
            .on_press(Message::DialogCancel)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
        Space::new().width(8),
        button(text("Save").size(11))
            .on_press(Message::DialogSave)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(8),
        description,
        Space::new().height(16),
        scrollable(rows).height(Length::Fixed(220.0)),
        Space::new().height(12),
        add_row,
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(480.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
