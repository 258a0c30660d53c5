// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

/// Default window scale multiplier (1.0 = the phone-shaped base size).
pub const DEFAULT_WINDOW_SCALE: f32 = 1.0;

/// Minimum allowed window scale.
pub const MIN_WINDOW_SCALE: f32 = 0.5;

/// Maximum allowed window scale.
pub const MAX_WINDOW_SCALE: f32 = 3.0;

/// Whether the post-processing layer is rendered when the capability exists.
pub const DEFAULT_RENDER_EFFECTS: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_SCALE > 0.0);
    assert!(MAX_WINDOW_SCALE > MIN_WINDOW_SCALE);
    assert!(DEFAULT_WINDOW_SCALE >= MIN_WINDOW_SCALE);
    assert!(DEFAULT_WINDOW_SCALE <= MAX_WINDOW_SCALE);
};
