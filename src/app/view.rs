// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen is a stack of full-size layers in a fixed order: the bottom
//! bar, the static diamond decoration, the filtered FAB layer (when the
//! effect capability is on), the plain interactive FAB layer, and the white
//! click-pulse diamond on top. Every animated layer is a pure function of
//! the two progress values in the [`AnimationFrame`].

use super::{AnimationFrame, Message};
use crate::render_effect::EffectMode;
use crate::ui::bottom_bar;
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::fab_group;
use crate::ui::shapes;
use iced::widget::{container, Stack};
use iced::{Background, Color, Element, Length};

/// Progress of the static diamond decoration: frozen at the pulse peak.
const STATIC_DIAMOND_PROGRESS: f32 = 0.5;

/// Context required to render the application view.
pub struct ViewContext {
    pub animation: AnimationFrame,
    pub effect_mode: EffectMode,
}

/// Renders the screen from the current animation frame.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let layers = Stack::new()
        .push(bottom_bar::view().map(Message::Bar))
        .push(shapes::diamond(
            Color {
                a: opacity::HALF,
                ..palette::PRIMARY
            },
            STATIC_DIAMOND_PROGRESS,
        ));

    let layers = match ctx.effect_mode {
        #[cfg(feature = "render-effects")]
        EffectMode::Filtered => layers.push(crate::render_effect::goo_shader::view(
            ctx.animation.fab_progress,
        )),
        _ => layers,
    };

    let layers = layers
        .push(fab_group::view(ctx.animation.fab_progress).map(Message::Fab))
        .push(shapes::diamond(
            palette::WHITE,
            ctx.animation.click_progress,
        ));

    container(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::BACKGROUND)),
            ..container::Style::default()
        })
        .into()
}
