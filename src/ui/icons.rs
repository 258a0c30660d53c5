// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! The icon set is drawn as vector paths instead of shipping bitmap assets:
//! every glyph is stroked/filled into a canvas frame, centered at the origin,
//! inside a `size` × `size` box. [`draw`] is used directly by canvas layers
//! (the FAB cluster draws its icons mid-transform) and [`view`] wraps a
//! single glyph as a widget for regular buttons.

use iced::widget::canvas::{self, path::Arc, Canvas, Frame, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// The icon set used by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Plus sign on the toggle FAB.
    Plus,
    /// Photo camera.
    Camera,
    /// Settings gear.
    Settings,
    /// Shopping cart.
    Cart,
    /// Calendar page.
    Calendar,
    /// Group of people.
    Group,
}

fn stroke(color: Color, width: f32) -> Stroke<'static> {
    Stroke::default()
        .with_width(width)
        .with_color(color)
        .with_line_cap(canvas::LineCap::Round)
}

/// Draws `icon` centered at the frame origin inside a `size` box.
///
/// Callers translate/rotate the frame first; the glyph itself is axis
/// aligned.
pub fn draw(frame: &mut Frame, icon: Icon, size: f32, color: Color) {
    let h = size / 2.0;
    let line = (size * 0.09).max(1.5);

    match icon {
        Icon::Plus => {
            let mut builder = canvas::path::Builder::new();
            builder.move_to(Point::new(0.0, -h * 0.75));
            builder.line_to(Point::new(0.0, h * 0.75));
            builder.move_to(Point::new(-h * 0.75, 0.0));
            builder.line_to(Point::new(h * 0.75, 0.0));
            frame.stroke(&builder.build(), stroke(color, line * 1.4));
        }
        Icon::Camera => {
            let mut builder = canvas::path::Builder::new();
            // Body with the viewfinder bump on top.
            builder.move_to(Point::new(-h * 0.85, -h * 0.45));
            builder.line_to(Point::new(-h * 0.3, -h * 0.45));
            builder.line_to(Point::new(-h * 0.15, -h * 0.7));
            builder.line_to(Point::new(h * 0.15, -h * 0.7));
            builder.line_to(Point::new(h * 0.3, -h * 0.45));
            builder.line_to(Point::new(h * 0.85, -h * 0.45));
            builder.line_to(Point::new(h * 0.85, h * 0.6));
            builder.line_to(Point::new(-h * 0.85, h * 0.6));
            builder.close();
            frame.stroke(&builder.build(), stroke(color, line));
            frame.stroke(
                &Path::circle(Point::new(0.0, h * 0.08), h * 0.32),
                stroke(color, line),
            );
        }
        Icon::Settings => {
            frame.stroke(&Path::circle(Point::ORIGIN, h * 0.55), stroke(color, line));
            frame.fill(&Path::circle(Point::ORIGIN, h * 0.18), color);
            // Eight teeth around the rim.
            let mut builder = canvas::path::Builder::new();
            for i in 0..8 {
                let angle = i as f32 * PI / 4.0;
                let (sin, cos) = angle.sin_cos();
                builder.move_to(Point::new(cos * h * 0.55, sin * h * 0.55));
                builder.line_to(Point::new(cos * h * 0.85, sin * h * 0.85));
            }
            frame.stroke(&builder.build(), stroke(color, line));
        }
        Icon::Cart => {
            let mut builder = canvas::path::Builder::new();
            builder.move_to(Point::new(-h * 0.9, -h * 0.6));
            builder.line_to(Point::new(-h * 0.55, -h * 0.35));
            builder.line_to(Point::new(h * 0.75, -h * 0.35));
            builder.line_to(Point::new(h * 0.5, h * 0.35));
            builder.line_to(Point::new(-h * 0.45, h * 0.35));
            builder.line_to(Point::new(-h * 0.55, -h * 0.35));
            frame.stroke(&builder.build(), stroke(color, line));
            frame.fill(&Path::circle(Point::new(-h * 0.35, h * 0.65), h * 0.14), color);
            frame.fill(&Path::circle(Point::new(h * 0.35, h * 0.65), h * 0.14), color);
        }
        Icon::Calendar => {
            let mut builder = canvas::path::Builder::new();
            builder.move_to(Point::new(-h * 0.7, -h * 0.55));
            builder.line_to(Point::new(h * 0.7, -h * 0.55));
            builder.line_to(Point::new(h * 0.7, h * 0.7));
            builder.line_to(Point::new(-h * 0.7, h * 0.7));
            builder.close();
            // Header separator and the two binding tabs.
            builder.move_to(Point::new(-h * 0.7, -h * 0.2));
            builder.line_to(Point::new(h * 0.7, -h * 0.2));
            builder.move_to(Point::new(-h * 0.35, -h * 0.8));
            builder.line_to(Point::new(-h * 0.35, -h * 0.4));
            builder.move_to(Point::new(h * 0.35, -h * 0.8));
            builder.line_to(Point::new(h * 0.35, -h * 0.4));
            frame.stroke(&builder.build(), stroke(color, line));
        }
        Icon::Group => {
            frame.stroke(
                &Path::circle(Point::new(-h * 0.35, -h * 0.3), h * 0.26),
                stroke(color, line),
            );
            frame.stroke(
                &Path::circle(Point::new(h * 0.35, -h * 0.3), h * 0.26),
                stroke(color, line),
            );
            let mut builder = canvas::path::Builder::new();
            builder.arc(Arc {
                center: Point::new(-h * 0.35, h * 0.65),
                radius: h * 0.45,
                start_angle: Radians(PI),
                end_angle: Radians(2.0 * PI),
            });
            builder.arc(Arc {
                center: Point::new(h * 0.35, h * 0.65),
                radius: h * 0.45,
                start_angle: Radians(PI),
                end_angle: Radians(2.0 * PI),
            });
            frame.stroke(&builder.build(), stroke(color, line));
        }
    }
}

/// A single glyph as a standalone canvas widget.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub icon: Icon,
    pub color: Color,
}

impl<Message> canvas::Program<Message> for Glyph {
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
        let size = bounds.width.min(bounds.height);
        frame.translate(iced::Vector::new(bounds.width / 2.0, bounds.height / 2.0));
        draw(&mut frame, self.icon, size, self.color);
        vec![frame.into_geometry()]
    }
}

/// Wraps a glyph as a fixed-size element for use inside buttons.
pub fn view<'a, Message: 'a>(icon: Icon, size: f32, color: Color) -> Element<'a, Message> {
    Canvas::new(Glyph { icon, color })
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_set_covers_the_screen() {
        // One glyph per tap target plus the toggle.
        let set = [
            Icon::Plus,
            Icon::Camera,
            Icon::Settings,
            Icon::Cart,
            Icon::Calendar,
            Icon::Group,
        ];
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn glyph_is_copy_for_cheap_recomposition() {
        let glyph = Glyph {
            icon: Icon::Plus,
            color: Color::WHITE,
        };
        let copy = glyph;
        assert_eq!(copy.icon, glyph.icon);
    }
}
