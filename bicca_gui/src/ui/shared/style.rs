//! Style table
//!
//! Tab buttons take their look from a [`TabStyle`] rather than ad-hoc style
//! strings, so an Active/Inactive change is one lookup.

use iced::border::Radius;
use iced::widget::button;
use iced::{font, Border, Color, Font, Shadow, Theme};

use bicca_core::panels::TabStyle;

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Muted text for placeholders and hints
pub const MUTED: [f32; 3] = [0.5, 0.5, 0.5];

struct TabColors {
    background: Color,
    border: Color,
}

fn tab_colors(style: TabStyle, hovered: bool, theme: &Theme) -> TabColors {
    let palette = theme.extended_palette();
    match (style, hovered) {
        (TabStyle::Active, _) => TabColors {
            background: palette.background.base.color,
            border: palette.background.strong.color,
        },
        (TabStyle::Inactive, true) => TabColors {
            background: palette.background.weak.color,
            border: palette.background.strong.color,
        },
        (TabStyle::Inactive, false) => TabColors {
            background: palette.background.strong.color,
            border: palette.background.strong.color,
        },
    }
}

/// Button style for a window tab in the given state
pub fn tab_button(style: TabStyle) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        let colors = tab_colors(style, hovered, theme);

        button::Style {
            background: Some(colors.background.into()),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: colors.border,
                width: 1.0,
                radius: Radius {
                    top_left: 5.0,
                    top_right: 5.0,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
            },
            shadow: Shadow::default(),
            snap: false,
        }
    }
}
