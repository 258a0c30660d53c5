// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the screen.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: layout insets
//! - **Sizing**: component sizes
//! - **Radius**: corner radii
//!
//! Tokens are designed to be consistent; check the impact on every
//! component before modifying one.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    /// Screen backdrop behind everything.
    pub const BACKGROUND: Color = Color::from_rgb(0.13, 0.11, 0.27);

    /// Bottom bar and its rotated decoration square (`#3A2F6E`).
    pub const NAVY: Color = Color::from_rgb(
        0x3A as f32 / 255.0,
        0x2F as f32 / 255.0,
        0x6E as f32 / 255.0,
    );

    /// Brand primary, used by the static diamond decoration.
    pub const PRIMARY: Color = Color::from_rgb(
        0x5B as f32 / 255.0,
        0x37 as f32 / 255.0,
        0xB7 as f32 / 255.0,
    );

    /// Brand secondary, the FAB body color.
    pub const SECONDARY: Color = Color::from_rgb(
        0x9B as f32 / 255.0,
        0x4D as f32 / 255.0,
        0xCA as f32 / 255.0,
    );
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Tint of the static diamond decoration.
    pub const HALF: f32 = 0.5;
    pub const HOVER: f32 = 0.12;
    pub const PRESSED: f32 = 0.2;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    /// Default inset around the FAB anchor and the pulse shapes.
    pub const DEFAULT: f32 = 16.0;
    /// Gap between the bar and the bottom edge of the window.
    pub const SCREEN_BOTTOM: f32 = 24.0;
    /// Horizontal inset of the bar's icon buttons.
    pub const BAR_HORIZONTAL: f32 = 40.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Side length of every FAB and pulse shape.
    pub const FAB_SIZE: f32 = 56.0;
    /// Extra visual scale applied to each FAB body.
    pub const FAB_SCALE: f32 = 1.10;
    /// Height of the bottom bar.
    pub const BAR_HEIGHT: f32 = 80.0;
    /// Side length of the rotated decoration square behind the bar.
    pub const BAR_DECOR_SIZE: f32 = 100.0;
    /// Icon glyph size inside FABs and the bar.
    pub const ICON_MD: f32 = 24.0;
    /// Stroke width of the pulse shape borders.
    pub const SHAPE_BORDER: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// Radius of the two rounded corners on every diamond shape.
    pub const DIAMOND: f32 = 10.0;
    /// Radius of the bar's top corners.
    pub const BAR_TOP: f32 = 20.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::DEFAULT > 0.0);
    assert!(spacing::SCREEN_BOTTOM > 0.0);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HALF > 0.0 && opacity::HALF < 1.0);

    assert!(sizing::FAB_SIZE > 0.0);
    assert!(sizing::FAB_SCALE >= 1.0);
    assert!(sizing::BAR_HEIGHT > sizing::FAB_SIZE);
    assert!(sizing::BAR_DECOR_SIZE > sizing::BAR_HEIGHT);

    assert!(radius::DIAMOND > radius::NONE);
    assert!(radius::DIAMOND < sizing::FAB_SIZE / 2.0);
};
