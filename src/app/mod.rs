// SPDX-License-Identifier: MPL-2.0
//! Application root state and the open/close state machine.
//!
//! The whole screen hangs off a single boolean: whether the FAB menu is
//! extended. Toggling it retargets two fixed-duration tweens, a 1 s layout
//! drive feeding every stagger window and a 0.4 s drive for the white
//! click-pulse diamond. Both are pure functions of time, so `view` simply
//! samples them at the current instant; a tap mid-transition redirects the
//! tweens from wherever they are instead of queueing a second animation.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::animation::{Easing, Tween};
use crate::config;
use crate::render_effect::{Capabilities, EffectMode};
use crate::ui::fab_group;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 390.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// Duration of the layout drive feeding the stagger windows.
const LAYOUT_ANIMATION: Duration = Duration::from_millis(1000);

/// Duration of the click-pulse drive.
const PULSE_ANIMATION: Duration = Duration::from_millis(400);

/// The two derived progress values sampled for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Global progress of the open/close cascade, 0 closed … 1 open.
    pub fab_progress: f32,
    /// Progress of the secondary click pulse.
    pub click_progress: f32,
}

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    /// Whether the FAB menu is extended. The toggle tap handler is the
    /// only writer.
    menu_open: bool,
    layout: Tween,
    pulse: Tween,
    /// Rendering strategy selected once at startup.
    effect_mode: EffectMode,
}

impl Default for App {
    fn default() -> Self {
        Self {
            menu_open: false,
            layout: Tween::settled(0.0, LAYOUT_ANIMATION, Easing::Linear),
            pulse: Tween::settled(0.0, PULSE_ANIMATION, Easing::Linear),
            effect_mode: EffectMode::select(
                Capabilities::detect(),
                config::DEFAULT_RENDER_EFFECTS,
            ),
        }
    }
}

/// Builds the window settings for the phone-shaped screen.
pub fn window_settings(scale: f32) -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH * scale, WINDOW_DEFAULT_HEIGHT * scale),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        resizable: true,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let config = config::load().unwrap_or_else(|error| {
        eprintln!("Failed to load config: {error}");
        config::Config::default()
    });
    let scale = config::clamp_window_scale(
        flags
            .scale
            .or(config.window_scale)
            .unwrap_or(config::DEFAULT_WINDOW_SCALE),
    );

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(scale))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {error}");
            config::Config::default()
        });

        let effects_enabled = !flags.no_effects
            && config
                .render_effects
                .unwrap_or(config::DEFAULT_RENDER_EFFECTS);

        let app = App {
            effect_mode: EffectMode::select(Capabilities::detect(), effects_enabled),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Fluid Navigation")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::animation_ticks(self.is_animating(Instant::now()))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Fab(fab_group::Event::Toggled) => {
                self.toggle_at(Instant::now());
                Task::none()
            }
            // The bar's buttons are click stubs: no state change.
            Message::Bar(_) => Task::none(),
            // Ticks exist solely to schedule the next frame; the view
            // re-samples the tweens itself.
            Message::Tick(_instant) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            animation: self.animation_at(Instant::now()),
            effect_mode: self.effect_mode,
        })
    }

    /// Flips the menu state and redirects both drives toward the new
    /// target. Mid-flight taps restart from the in-flight values.
    fn toggle_at(&mut self, now: Instant) {
        self.menu_open = !self.menu_open;
        let target = if self.menu_open { 1.0 } else { 0.0 };
        self.layout.retarget(target, now);
        self.pulse.retarget(target, now);
    }

    /// Samples both drives at `now`.
    #[must_use]
    pub fn animation_at(&self, now: Instant) -> AnimationFrame {
        AnimationFrame {
            fab_progress: self.layout.value_at(now),
            click_progress: self.pulse.value_at(now),
        }
    }

    /// Whether any drive still has frames to produce.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.layout.is_settled(now) || !self.pulse.is_settled(now)
    }

    /// Whether the menu is extended.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// The rendering strategy selected at startup.
    #[must_use]
    pub fn effect_mode(&self) -> EffectMode {
        self.effect_mode
    }
}
