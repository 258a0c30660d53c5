// SPDX-License-Identifier: MPL-2.0
//! Animation primitives driving the screen.
//!
//! Everything here is a pure function of time and a single boolean target:
//! [`easing`] maps linear fractions through Material curves, [`timeline`]
//! drives a retargetable tween between 0 and 1, and [`stagger`] turns one
//! global progress value into per-element poses via per-element sub-windows.

pub mod easing;
pub mod stagger;
pub mod timeline;

pub use easing::Easing;
pub use stagger::{FabMotion, FabPose, StaggerWindow};
pub use timeline::Tween;
