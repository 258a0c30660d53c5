// SPDX-License-Identifier: MPL-2.0
//! Per-element stagger windows for the FAB cascade.
//!
//! A single global progress value in `[0, 1]` drives the whole open/close
//! transition. Each element owns a sub-window of that drive, so the three
//! satellite buttons fan out one after another, the filler shrinks away in
//! the middle of the sweep, and the toggle spins during its own slice.
//! The windows live in one static table rather than inline literals so the
//! cascade is data, testable without any rendering.

use super::easing::Easing;
use crate::ui::icons::Icon;
use iced::Vector;

/// The `[start, end]` slice of global progress an element animates over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerWindow {
    pub start: f32,
    pub end: f32,
}

impl StaggerWindow {
    /// Creates a window. `start` must be strictly below `end`.
    #[must_use]
    pub const fn new(start: f32, end: f32) -> Self {
        assert!(start < end);
        Self { start, end }
    }

    /// Maps global progress into this window's local `[0, 1]` range,
    /// clamping outside values instead of rejecting them.
    #[must_use]
    pub fn project(self, progress: f32) -> f32 {
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// Icon tilt compensating for the 45° body rotation of every FAB.
pub const ICON_TILT_DEGREES: f32 = -45.0;

/// Total spin of the toggle's plus icon across a full open sweep.
pub const TOGGLE_ROTATION_DEGREES: f32 = 225.0;

/// Window over which the toggle spins.
pub const TOGGLE_ROTATION_WINDOW: StaggerWindow = StaggerWindow::new(0.35, 0.65);

/// Window over which the center filler shrinks to nothing.
pub const FILLER_SCALE_WINDOW: StaggerWindow = StaggerWindow::new(0.5, 0.85);

/// Motion description of one satellite FAB.
#[derive(Debug, Clone, Copy)]
pub struct FabMotion {
    pub icon: Icon,
    /// Fully-open displacement from the anchor: x to the right, y upward.
    pub offset: Vector,
    /// Window driving the displacement (standard curve).
    pub offset_window: StaggerWindow,
    /// Window driving the icon opacity (linear).
    pub opacity_window: StaggerWindow,
}

/// The three satellite buttons, in paint order.
pub const SATELLITES: [FabMotion; 3] = [
    FabMotion {
        icon: Icon::Camera,
        offset: Vector::new(-120.0, 55.0),
        offset_window: StaggerWindow::new(0.0, 0.8),
        opacity_window: StaggerWindow::new(0.2, 0.7),
    },
    FabMotion {
        icon: Icon::Settings,
        offset: Vector::new(0.0, 115.0),
        offset_window: StaggerWindow::new(0.1, 0.9),
        opacity_window: StaggerWindow::new(0.3, 0.8),
    },
    FabMotion {
        icon: Icon::Cart,
        offset: Vector::new(120.0, 55.0),
        offset_window: StaggerWindow::new(0.2, 1.0),
        opacity_window: StaggerWindow::new(0.4, 0.9),
    },
];

/// A satellite's resolved position and icon opacity at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabPose {
    /// Displacement from the anchor: x to the right, y upward.
    pub offset: Vector,
    pub icon_opacity: f32,
}

impl FabMotion {
    /// Resolves this FAB's pose at the given global progress.
    #[must_use]
    pub fn pose(&self, progress: f32) -> FabPose {
        let travelled = Easing::FastOutSlowIn.between(self.offset_window, progress);
        FabPose {
            offset: self.offset * travelled,
            icon_opacity: Easing::Linear.between(self.opacity_window, progress),
        }
    }
}

/// Scale of the center filler FAB; 1 when closed, 0 once the cascade passes.
#[must_use]
pub fn filler_scale(progress: f32) -> f32 {
    1.0 - Easing::Linear.between(FILLER_SCALE_WINDOW, progress)
}

/// Rotation of the toggle FAB in degrees, on top of its 45° base tilt.
#[must_use]
pub fn toggle_rotation(progress: f32) -> f32 {
    TOGGLE_ROTATION_DEGREES * Easing::FastOutSlowIn.between(TOGGLE_ROTATION_WINDOW, progress)
}
