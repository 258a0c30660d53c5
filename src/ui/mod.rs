// SPDX-License-Identifier: MPL-2.0
//! UI components: design tokens, icon glyphs, shape primitives, and the two
//! screen components (bottom bar, FAB cluster).

pub mod bottom_bar;
pub mod design_tokens;
pub mod fab_group;
pub mod icons;
pub mod shapes;
pub mod styles;

use design_tokens::{sizing, spacing};
use iced::{Point, Rectangle};

/// The shared anchor every animated element expands from: the center of the
/// collapsed FAB stack, horizontally centered just above the bottom inset.
#[must_use]
pub fn fab_anchor(bounds: Rectangle) -> Point {
    Point::new(
        bounds.width / 2.0,
        bounds.height - spacing::SCREEN_BOTTOM - spacing::DEFAULT - sizing::FAB_SIZE / 2.0,
    )
}
