//! Status Bar (Bottom)
//!
//! Displays:
//! - "Data" look-up: category picker, search box and Search button
//! - Status message (e.g. last dialog save)

use iced::widget::{button, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use bicca_core::project::LookupCategory;

use super::shared::style::BOLD;
use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    lookup: LookupCategory,
    query: &'a str,
    status: &'a str,
) -> Element<'a, Message> {
    row![
        text("Data").size(10).font(BOLD),
        text("Look up:").size(10),
        pick_list(LookupCategory::ALL, Some(lookup), Message::LookupSelected)
            .width(Length::Fixed(170.0))
            .text_size(10),
        text_input("Search...", query)
            .on_input(Message::LookupQueryChanged)
            .on_submit(Message::LookupSearch)
            .width(Length::Fixed(200.0))
            .padding(3)
            .size(10),
        button(text("Search").size(10))
            .on_press(Message::LookupSearch)
            .padding(Padding::from([3, 8]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .spacing(5)
    .padding(Padding::from([4, 10]))
    .align_y(Alignment::Center)
    .into()
}
