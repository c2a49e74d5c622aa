//! Tutorials Panel (Left Side)
//!
//! Fixed-width panel paging through the getting-started tutorial.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Padding};

use bicca_core::tutorial::TutorialCursor;

use super::shared::panel_header::view_panel_header;
use super::shared::style::{BOLD, MUTED};
use crate::Message;

pub fn view(cursor: &TutorialCursor) -> Element<'static, Message> {
    let page = cursor.render();

    let content = column![
        container(text(page.index_label).size(10).color(MUTED))
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right),
        text(page.title).size(18).font(BOLD),
        Space::new().height(8),
        text(page.body).size(11),
    ]
    .spacing(6)
    .padding(12);

    let back = button(text("Back").size(11))
        .on_press_maybe((!cursor.is_first()).then_some(Message::TutorialBack))
        .padding(Padding::from([4, 12]))
        .style(button::secondary);
    let next = button(text("Next").size(11))
        .on_press_maybe((!cursor.is_last()).then_some(Message::TutorialNext))
        .padding(Padding::from([4, 12]))
        .style(button::primary);

    let nav = row![Space::new().width(Length::Fill), back, next]
        .spacing(6)
        .padding(8)
        .align_y(Alignment::Center);

    container(column![
        view_panel_header("Tutorials", Some(Message::CloseTutorials)),
        scrollable(content).height(Length::Fill),
        nav,
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container::bordered_box)
    .into()
}
