// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the animation tick: while a transition is in
//! flight the app asks for ~60 Hz redraw ticks, and once both tweens have
//! settled the subscription drops back to none so an idle screen schedules
//! no work.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between animation ticks (~60 Hz).
const TICK_MILLIS: u64 = 16;

/// Creates the animation tick subscription while a transition runs.
pub fn animation_ticks(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(TICK_MILLIS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
