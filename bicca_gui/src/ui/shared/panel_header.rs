//! Panel header row: bold title on the left, optional "×" on the right.

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use super::style::BOLD;
use crate::Message;

pub fn view_panel_header(title: &'static str, on_close: Option<Message>) -> Element<'static, Message> {
    let mut header = row![text(title).size(12).font(BOLD), Space::new().width(Length::Fill)]
        .align_y(Alignment::Center);

    if let Some(message) = on_close {
        header = header.push(
            button(text("×").size(14))
                .on_press(message)
                .padding(Padding::from([0, 6]))
                .style(button::text),
        );
    }

    container(header)
        .height(Length::Fixed(40.0))
        .padding(Padding::from([0, 10]))
        .align_y(iced::alignment::Vertical::Center)
        .width(Length::Fill)
        .into()
}
