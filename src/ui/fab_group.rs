// SPDX-License-Identifier: MPL-2.0
//! The expandable FAB cluster.
//!
//! One canvas layer draws all five buttons from the static motion table:
//! three satellites fanning out along their stagger windows, the shrinking
//! center filler, and the rotating toggle. The same drawing is rendered a
//! second time underneath by the render-effect layer; this plain layer is
//! the one that owns the tap target.
//!
//! Only the toggle is interactive. Its hit region is the resting diamond;
//! the spin animation does not move the tap target.

use crate::animation::stagger::{self, FabPose, ICON_TILT_DEGREES, SATELLITES};
use crate::ui::design_tokens::{palette, radius, sizing};
use crate::ui::fab_anchor;
use crate::ui::icons::{self, Icon};
use crate::ui::shapes::diamond_path;
use iced::widget::canvas::{self, Canvas, Frame};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::PI;

/// Events published by the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The central toggle was tapped.
    Toggled,
}

/// Canvas program rendering the cluster at a given global progress.
#[derive(Debug, Clone, Copy)]
pub struct FabGroup {
    pub progress: f32,
}

/// Half diagonal of a FAB body diamond, the toggle's hit radius.
fn hit_radius() -> f32 {
    sizing::FAB_SIZE / 2.0 * sizing::FAB_SCALE * std::f32::consts::SQRT_2
}

/// Whether a point, relative to the anchor, falls inside the toggle diamond.
fn toggle_contains(offset: Vector) -> bool {
    offset.x.abs() + offset.y.abs() <= hit_radius()
}

fn degrees(value: f32) -> Radians {
    Radians(value * PI / 180.0)
}

impl FabGroup {
    fn body_half() -> f32 {
        sizing::FAB_SIZE / 2.0 * sizing::FAB_SCALE
    }

    /// Draws one FAB body (rotated rounded diamond) plus an optional icon.
    ///
    /// `rotation` is the body rotation in degrees; the icon is tilted back
    /// by [`ICON_TILT_DEGREES`] so it stays upright relative to the body's
    /// base 45° tilt.
    fn draw_fab(
        frame: &mut Frame,
        center: Point,
        rotation: f32,
        scale: f32,
        body: Option<Color>,
        icon: Option<(Icon, f32)>,
    ) {
        if scale <= 0.0 {
            return;
        }
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(degrees(rotation));
            frame.scale(scale);
            if let Some(color) = body {
                frame.fill(&diamond_path(Self::body_half(), radius::DIAMOND), color);
            }
            if let Some((icon, opacity)) = icon {
                if opacity > 0.0 {
                    frame.rotate(degrees(ICON_TILT_DEGREES));
                    icons::draw(
                        frame,
                        icon,
                        sizing::ICON_MD,
                        Color {
                            a: opacity,
                            ..palette::WHITE
                        },
                    );
                }
            }
        });
    }
}

impl canvas::Program<Event> for FabGroup {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Event>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                let anchor = fab_anchor(Rectangle::with_size(bounds.size()));
                let offset = Vector::new(position.x - anchor.x, position.y - anchor.y);
                if toggle_contains(offset) {
                    return Some(Action::publish(Event::Toggled).and_capture());
                }
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let anchor = fab_anchor(Rectangle::with_size(bounds.size()));

        for motion in &SATELLITES {
            let FabPose {
                offset,
                icon_opacity,
            } = motion.pose(self.progress);
            let center = Point::new(anchor.x + offset.x, anchor.y - offset.y);
            Self::draw_fab(
                &mut frame,
                center,
                45.0,
                1.0,
                Some(palette::SECONDARY),
                Some((motion.icon, icon_opacity)),
            );
        }

        // Center filler: keeps a body under the transparent toggle while
        // the menu is closed, then shrinks away mid-sweep.
        Self::draw_fab(
            &mut frame,
            anchor,
            45.0,
            stagger::filler_scale(self.progress),
            Some(palette::SECONDARY),
            None,
        );

        // Toggle: transparent body, spinning plus icon.
        Self::draw_fab(
            &mut frame,
            anchor,
            45.0 + stagger::toggle_rotation(self.progress),
            1.0,
            None,
            Some((Icon::Plus, 1.0)),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if let Some(position) = cursor.position_in(bounds) {
            let anchor = fab_anchor(Rectangle::with_size(bounds.size()));
            let offset = Vector::new(position.x - anchor.x, position.y - anchor.y);
            if toggle_contains(offset) {
                return mouse::Interaction::Pointer;
            }
        }
        mouse::Interaction::default()
    }
}

/// Full-screen interactive layer for the cluster.
pub fn view<'a>(progress: f32) -> Element<'a, Event> {
    Canvas::new(FabGroup { progress })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_hit_region_is_the_resting_diamond() {
        assert!(toggle_contains(Vector::new(0.0, 0.0)));
        assert!(toggle_contains(Vector::new(20.0, 20.0)));
        // The diamond's horizontal extent is the half diagonal (~43.6);
        // a point just outside misses, a corner-box point misses too.
        assert!(!toggle_contains(Vector::new(44.0, 0.0)));
        assert!(!toggle_contains(Vector::new(31.0, 31.0)));
    }

    #[test]
    fn hit_radius_matches_the_scaled_body() {
        let expected = 56.0 / 2.0 * 1.10 * std::f32::consts::SQRT_2;
        assert!((hit_radius() - expected).abs() < 1e-4);
    }

    #[test]
    fn toggle_icon_is_upright_when_closed() {
        // Body tilt 45° plus icon tilt −45° cancels out at progress 0.
        let net = 45.0 + stagger::toggle_rotation(0.0) + ICON_TILT_DEGREES;
        assert_eq!(net, 0.0);
    }

    #[test]
    fn toggle_icon_lands_at_full_spin_when_open() {
        let net = 45.0 + stagger::toggle_rotation(1.0) + ICON_TILT_DEGREES;
        assert_eq!(net, stagger::TOGGLE_ROTATION_DEGREES);
    }
}
