// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar.
//!
//! Two stacked decorative layers (a rotated square poking up behind the
//! bar's center, then the bar itself with rounded top corners) plus two
//! static icon buttons. The buttons are click stubs: they emit messages but
//! trigger no state change, matching the screen's single interactive tap
//! target (the FAB toggle).

use super::design_tokens::{palette, radius, sizing, spacing};
use super::icons::{self, Icon};
use super::styles;
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Canvas, Frame, Path};
use iced::widget::{button, container, space, Row, Stack};
use iced::{mouse, Element, Length, Padding, Point, Radians, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::PI;

/// Messages emitted by the bar's icon buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CalendarPressed,
    GroupPressed,
}

/// Decorative backdrop: rotated square plus the bar silhouette.
#[derive(Debug, Clone, Copy, Default)]
struct Backdrop;

impl Backdrop {
    fn bar_top(bounds: Rectangle) -> f32 {
        bounds.height - spacing::SCREEN_BOTTOM - sizing::BAR_HEIGHT
    }
}

impl<Message> canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let bar_top = Self::bar_top(bounds);

        // Rotated decoration square; its upper half shows above the bar as
        // the notch backdrop behind the collapsed FAB stack.
        frame.with_save(|frame| {
            frame.translate(Vector::new(
                bounds.width / 2.0,
                bar_top + sizing::BAR_HEIGHT / 2.0,
            ));
            frame.rotate(Radians(PI / 4.0));
            let half = sizing::BAR_DECOR_SIZE / 2.0;
            frame.fill(
                &Path::rectangle(
                    Point::new(-half, -half),
                    iced::Size::new(sizing::BAR_DECOR_SIZE, sizing::BAR_DECOR_SIZE),
                ),
                palette::NAVY,
            );
        });

        // The bar, rounded at the top corners only.
        let r = radius::BAR_TOP;
        let bottom = bounds.height - spacing::SCREEN_BOTTOM;
        let mut builder = canvas::path::Builder::new();
        builder.move_to(Point::new(0.0, bottom));
        builder.line_to(Point::new(0.0, bar_top + r));
        builder.arc_to(
            Point::new(0.0, bar_top),
            Point::new(r, bar_top),
            r,
        );
        builder.line_to(Point::new(bounds.width - r, bar_top));
        builder.arc_to(
            Point::new(bounds.width, bar_top),
            Point::new(bounds.width, bar_top + r),
            r,
        );
        builder.line_to(Point::new(bounds.width, bottom));
        builder.close();
        frame.fill(&builder.build(), palette::NAVY);

        vec![frame.into_geometry()]
    }
}

/// Renders the bar: backdrop canvas underneath, icon button row on top.
pub fn view<'a>() -> Element<'a, Message> {
    let backdrop = Canvas::new(Backdrop)
        .width(Length::Fill)
        .height(Length::Fill);

    let calendar = button(icons::view(Icon::Calendar, sizing::ICON_MD, palette::WHITE))
        .style(styles::button::bar_icon)
        .on_press(Message::CalendarPressed);
    let group = button(icons::view(Icon::Group, sizing::ICON_MD, palette::WHITE))
        .style(styles::button::bar_icon)
        .on_press(Message::GroupPressed);

    let row = Row::new()
        .push(calendar)
        .push(space::horizontal())
        .push(group)
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::BAR_HEIGHT))
        .padding(Padding {
            left: spacing::BAR_HORIZONTAL,
            right: spacing::BAR_HORIZONTAL,
            ..Padding::ZERO
        })
        .width(Length::Fill);

    let buttons = container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .padding(Padding {
            bottom: spacing::SCREEN_BOTTOM,
            ..Padding::ZERO
        });

    Stack::new().push(backdrop).push(buttons).into()
}
