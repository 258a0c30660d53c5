// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::bottom_bar;
use crate::ui::fab_group;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component events while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The FAB cluster published an event (the toggle was tapped).
    Fab(fab_group::Event),
    /// One of the bar's stub buttons was pressed.
    Bar(bottom_bar::Message),
    /// Animation frame tick while a transition is in flight.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Disable the post-processing layer regardless of config/capability.
    pub no_effects: bool,
    /// Optional window scale override (0.5 – 3.0).
    pub scale: Option<f32>,
}
