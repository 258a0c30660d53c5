// SPDX-License-Identifier: MPL-2.0
//! `fluid_nav` renders a single animated mobile-style screen with the Iced
//! GUI framework: a bottom navigation bar, an expandable FAB cluster whose
//! open/close cascade is driven by one boolean and per-element stagger
//! windows, diamond pulse decorations, and a capability-gated "goo"
//! post-processing layer behind the cluster.

#![doc(html_root_url = "https://docs.rs/fluid_nav/0.1.0")]

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod render_effect;
pub mod ui;
