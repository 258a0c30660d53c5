// SPDX-License-Identifier: MPL-2.0
//! Animated pulse shape primitives.
//!
//! A pulse shape is a bordered outline whose scale and border opacity follow
//! a sine of the animation progress: the border fades in while the shape
//! contracts from double size to its natural size at the half-way point,
//! then fades back out as it grows again. `progress` 0 and 1 are therefore
//! both invisible, which is what makes the white diamond read as a click
//! ripple.

use super::design_tokens::{radius, sizing};
use super::fab_anchor;
use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::PI;

/// Sine pulse of the animation progress: rises 0 → 1 → 0 over a sweep.
#[must_use]
pub fn pulse(progress: f32) -> f32 {
    (PI * progress.clamp(0.0, 1.0)).sin()
}

/// Visual scale of a pulse shape: 2 at rest, 1 at the pulse peak.
#[must_use]
pub fn pulse_scale(progress: f32) -> f32 {
    2.0 - pulse(progress)
}

/// Builds the diamond outline: a square with two opposite corners rounded,
/// centered at the origin. Rotated 45° at draw time.
#[must_use]
pub fn diamond_path(half: f32, corner_radius: f32) -> Path {
    let r = corner_radius.min(half);
    let mut builder = canvas::path::Builder::new();
    builder.move_to(Point::new(-half, -half));
    builder.line_to(Point::new(half - r, -half));
    builder.arc_to(
        Point::new(half, -half),
        Point::new(half, -half + r),
        r,
    );
    builder.line_to(Point::new(half, half));
    builder.line_to(Point::new(-half + r, half));
    builder.arc_to(
        Point::new(-half, half),
        Point::new(-half, half - r),
        r,
    );
    builder.close();
    builder.build()
}

/// Circular pulse outline anchored at the FAB anchor point.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub color: Color,
    pub progress: f32,
}

impl<Message> canvas::Program<Message> for Circle {
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
        let value = pulse(self.progress);
        let border = Color {
            a: self.color.a * value,
            ..self.color
        };
        let radius = sizing::FAB_SIZE / 2.0 * pulse_scale(self.progress);
        let anchor = fab_anchor(bounds);
        frame.stroke(
            &Path::circle(anchor, radius),
            Stroke::default()
                .with_width(sizing::SHAPE_BORDER)
                .with_color(border),
        );
        vec![frame.into_geometry()]
    }
}

/// Diamond pulse outline anchored at the FAB anchor point.
#[derive(Debug, Clone, Copy)]
pub struct Diamond {
    pub color: Color,
    pub progress: f32,
}

impl<Message> canvas::Program<Message> for Diamond {
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
        let value = pulse(self.progress);
        let border = Color {
            a: self.color.a * value,
            ..self.color
        };
        let half = sizing::FAB_SIZE / 2.0 * pulse_scale(self.progress);
        let anchor = fab_anchor(bounds);

        frame.translate(Vector::new(anchor.x, anchor.y));
        frame.rotate(Radians(PI / 4.0));
        frame.stroke(
            &diamond_path(half, radius::DIAMOND),
            Stroke::default()
                .with_width(sizing::SHAPE_BORDER)
                .with_color(border),
        );
        vec![frame.into_geometry()]
    }
}

/// Full-screen layer rendering one diamond pulse.
pub fn diamond<'a, Message: 'a>(color: Color, progress: f32) -> Element<'a, Message> {
    Canvas::new(Diamond { color, progress })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Full-screen layer rendering one circle pulse.
pub fn circle<'a, Message: 'a>(color: Color, progress: f32) -> Element<'a, Message> {
    Canvas::new(Circle { color, progress })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_peaks_at_the_midpoint() {
        assert!(pulse(0.0).abs() < 1e-6);
        assert!((pulse(0.5) - 1.0).abs() < 1e-6);
        assert!(pulse(1.0).abs() < 1e-6);
    }

    #[test]
    fn scale_is_two_at_rest_and_one_at_peak() {
        assert!((pulse_scale(0.0) - 2.0).abs() < 1e-6);
        assert!((pulse_scale(0.5) - 1.0).abs() < 1e-6);
        assert!((pulse_scale(1.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pulse_clamps_out_of_range_progress() {
        assert_eq!(pulse(-1.0), pulse(0.0));
        assert_eq!(pulse(2.0), pulse(1.0));
    }

    #[test]
    fn border_alpha_preserves_base_tint() {
        // The border alpha is the shape color's alpha scaled by the pulse,
        // so a half-transparent color never exceeds half opacity.
        let base = Color {
            a: 0.5,
            ..Color::WHITE
        };
        let value = pulse(0.5);
        assert!((base.a * value - 0.5).abs() < 1e-6);
        assert!(base.a * pulse(0.1) < 0.5);
    }

    #[test]
    fn diamond_corner_radius_is_capped_by_half_extent() {
        // A degenerate tiny shape must not request an arc larger than
        // itself; the path builder would produce garbage otherwise.
        let _ = diamond_path(4.0, radius::DIAMOND);
        let _ = diamond_path(sizing::FAB_SIZE / 2.0, radius::DIAMOND);
    }
}
