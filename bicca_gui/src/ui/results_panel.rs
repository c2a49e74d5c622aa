//! Results and Compare Panels
//!
//! Both are placeholders until the analysis engine exists.

use iced::widget::{column, container, text, Space};
use iced::{Element, Length};

use super::shared::panel_header::view_panel_header;
use super::shared::style::{BOLD, MUTED};
use crate::Message;

pub fn view_results() -> Element<'static, Message> {
    view_placeholder(
        "Results",
        "Results content goes here.",
        "This panel will display analytical results.",
    )
}

pub fn view_compare() -> Element<'static, Message> {
    view_placeholder(
        "Compare",
        "Compare different scenarios here.",
        "This panel will allow side-by-side comparisons.",
    )
}

fn view_placeholder(
    title: &'static str,
    heading: &'static str,
    detail: &'static str,
) -> Element<'static, Message> {
    let body = column![
        text(heading).size(18).font(BOLD),
        Space::new().height(6),
        text(detail).size(11).color(MUTED),
    ]
    .padding(12);

    container(column![view_panel_header(title, None), body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}
