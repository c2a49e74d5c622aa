//! Project Details Panel
//!
//! Three collapsible groups:
//! - General Information - company, project and valuation metadata
//! - Input Parameters - category dialog launchers, two of them nested in
//!   Structure Works Data and Carbon Emission Data
//! - Outputs - placeholder
//!
//! What is shown is decided by `bicca_core::sections`; this module only
//! asks it per widget.

use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_editor, text_input, Column,
    Space,
};
use iced::{Alignment, Element, Length, Padding};

use bicca_core::dialogs::CategoryDialog;
use bicca_core::project::{GeneralField, COUNTRIES};
use bicca_core::sections::{Group, Member, SectionState, SubGroup};

use super::shared::panel_header::view_panel_header;
use super::shared::style::MUTED;
use crate::{App, Message};

const LABEL_WIDTH: f32 = 140.0;

/// Render the Project Details panel
pub fn view(app: &App) -> Element<'_, Message> {
    let sections = &app.session.sections;

    let groups = column![
        view_group(sections, Group::GeneralInformation, view_general_information(app)),
        view_group(sections, Group::InputParameters, view_input_parameters(sections)),
        view_group(sections, Group::Outputs, view_outputs(sections)),
    ]
    .spacing(10)
    .padding(10);

    container(column![
        view_panel_header("Project Details Window", Some(Message::CloseProjectDetails)),
        scrollable(groups).height(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Collapsible group: header button with indicator, then the body
fn view_group<'a>(
    sections: &SectionState,
    group: Group,
    body: Column<'a, Message>,
) -> Element<'a, Message> {
    let header = button(
        row![
            text(sections.group_indicator(group).glyph()).size(10),
            Space::new().width(4),
            text(group.title()).size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleGroup(group))
    .padding(Padding::from([4, 6]))
    .style(button::text)
    .width(Length::Fill);

    container(column![header, body.padding(Padding::from([0, 12]))].spacing(6))
        .padding(6)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn view_general_information(app: &App) -> Column<'_, Message> {
    let sections = &app.session.sections;
    let general = &app.session.general;
    let mut body: Column<'_, Message> = column![].spacing(10);

    for field in GeneralField::ALL {
        if !sections.is_visible(Member::Field(field)) {
            continue;
        }

        let input: Element<'_, Message> = match field {
            GeneralField::ProjectDescription => text_editor(&app.description)
                .placeholder(field.placeholder())
                .on_action(Message::DescriptionEdited)
                .height(Length::Fixed(100.0))
                .size(11)
                .into(),
            GeneralField::Country => pick_list(COUNTRIES, general.country_choice(), Message::CountrySelected)
                .width(Length::Fill)
                .text_size(11)
                .into(),
            _ => text_input(field.placeholder(), general.get(field))
                .on_input(move |value| Message::GeneralFieldChanged(field, value))
                .width(Length::Fill)
                .padding(4)
                .size(11)
                .into(),
        };

        body = body.push(labeled_row(field.label(), input));
    }

    body
}

/// Label column followed by its input
fn labeled_row<'a>(label: &'static str, input: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(11).width(Length::Fixed(LABEL_WIDTH)), input]
        .align_y(Alignment::Center)
        .into()
}

fn view_input_parameters(sections: &SectionState) -> Column<'static, Message> {
    let mut body: Column<'static, Message> = column![].spacing(5);

    for member in Group::InputParameters.members() {
        if !sections.is_visible(member) {
            continue;
        }
        match member {
            Member::SubGroupToggle(sub) => {
                body = body.push(view_sub_group_toggle(sections, sub));
                if sections.is_visible(Member::SubGroupContainer(sub)) {
                    body = body.push(view_sub_group_container(sub));
                }
            }
            Member::Launcher(dialog) => {
                body = body.push(launcher_button(dialog));
            }
            _ => {}
        }
    }

    body
}

fn view_sub_group_toggle(sections: &SectionState, sub: SubGroup) -> Element<'static, Message> {
    let style = if sections.is_checked(sub) { button::primary } else { button::secondary };

    button(
        row![
            text(sections.sub_group_indicator(sub).glyph()).size(10),
            Space::new().width(4),
            text(sub.title()).size(11),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleSubGroup(sub))
    .padding(Padding::from([6, 10]))
    .style(style)
    .width(Length::Fill)
    .into()
}

fn view_sub_group_container(sub: SubGroup) -> Element<'static, Message> {
    let mut launchers: Column<'static, Message> = column![].spacing(4);
    for dialog in sub.launchers() {
        launchers = launchers.push(launcher_button(*dialog));
    }

    container(launchers)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 4.0,
            left: 20.0,
        })
        .width(Length::Fill)
        .into()
}

fn launcher_button(dialog: CategoryDialog) -> Element<'static, Message> {
    button(text(dialog.button_label()).size(11))
        .on_press(Message::OpenDialog(dialog))
        .padding(Padding::from([6, 10]))
        .style(button::secondary)
        .width(Length::Fill)
        .into()
}

fn view_outputs(sections: &SectionState) -> Column<'static, Message> {
    if sections.is_visible(Member::OutputsPlaceholder) {
        column![text("Output content goes here.").size(11).color(MUTED)]
    } else {
        column![]
    }
}
