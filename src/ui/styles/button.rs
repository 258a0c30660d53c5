// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the bar's icon buttons: transparent at rest, with a faint
/// white wash on hover and press.
pub fn bar_icon(_theme: &Theme, status: button::Status) -> button::Style {
    let wash = match status {
        button::Status::Hovered => opacity::HOVER,
        button::Status::Pressed => opacity::PRESSED,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: wash,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_icon_is_transparent_at_rest() {
        let style = bar_icon(&Theme::Dark, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 0.0),
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn bar_icon_washes_in_on_hover() {
        let style = bar_icon(&Theme::Dark, button::Status::Hovered);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a > 0.0),
            _ => panic!("expected a color background"),
        }
    }
}
