//! Toolbar component
//!
//! Shortcuts for the most used File menu commands.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length, Padding};

use super::menu_bar::MenuAction;
use crate::Message;

const TOOLBAR_ACTIONS: [MenuAction; 3] = [MenuAction::New, MenuAction::Open, MenuAction::Save];

/// Render the toolbar
pub fn view_toolbar() -> Element<'static, Message> {
    let mut buttons = row![].spacing(4).align_y(Alignment::Center);

    for action in TOOLBAR_ACTIONS {
        buttons = buttons.push(
            button(text(action.label()).size(11))
                .on_press(Message::MenuAction(action))
                .padding(Padding::from([4, 8]))
                .style(button::secondary),
        );
    }

    container(buttons)
        .padding(Padding::from([4, 10]))
        .width(Length::Fill)
        .into()
}
