// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the staggered open/close cascade.
//!
//! The curves are the Material tween curves expressed as cubic Béziers.
//! [`Easing::between`] is the workhorse: it remaps a global progress value
//! through a per-element [`StaggerWindow`](super::StaggerWindow) before
//! applying the curve, which is what lets five elements cascade from a
//! single animated float.

use super::stagger::StaggerWindow;

/// Easing functions applied to a linear fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    #[default]
    Linear,
    /// Material standard curve, cubic Bézier (0.4, 0.0, 0.2, 1.0).
    FastOutSlowIn,
    /// Material deceleration curve, cubic Bézier (0.0, 0.0, 0.2, 1.0).
    LinearOutSlowIn,
    /// Material acceleration curve, cubic Bézier (0.4, 0.0, 1.0, 1.0).
    FastOutLinearIn,
}

impl Easing {
    /// Applies the curve to a linear fraction, clamping the input to `[0, 1]`.
    #[must_use]
    pub fn transform(self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }

    /// Projects a global progress value into `window` and eases the result.
    ///
    /// This is the staggering primitive: each animated element owns a
    /// sub-window of the global `[0, 1]` drive, so its local motion starts
    /// and ends at different points than its neighbours'.
    #[must_use]
    pub fn between(self, window: StaggerWindow, progress: f32) -> f32 {
        self.transform(window.project(progress))
    }
}

/// Evaluates a cubic Bézier easing curve at the given x fraction.
///
/// Solves for the curve parameter with Newton-Raphson, falling back to
/// binary subdivision when the derivative vanishes.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}
