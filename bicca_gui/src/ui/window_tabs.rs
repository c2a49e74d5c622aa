//! Window tabs row
//!
//! "Windows:" followed by one button per panel. Highlighting comes from the
//! panel coordinator, never from the button's own state.

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use bicca_core::panels::{PanelState, Tab};

use super::shared::style::{self, BOLD};
use crate::Message;

pub fn view_window_tabs(panels: &PanelState) -> Element<'static, Message> {
    let mut tabs = row![text("Windows:").size(12).font(BOLD), Space::new().width(5)]
        .spacing(4)
        .align_y(Alignment::End);

    for tab in Tab::ALL {
        tabs = tabs.push(
            button(text(tab.caption()).size(11))
                .on_press(Message::TabClicked(tab))
                .padding(Padding::from([5, 15]))
                .width(Length::Shrink)
                .style(style::tab_button(panels.tab_style(tab))),
        );
    }

    container(tabs)
        .height(Length::Fixed(40.0))
        .padding(Padding::from([0, 10]))
        .align_y(iced::alignment::Vertical::Bottom)
        .width(Length::Fill)
        .into()
}
