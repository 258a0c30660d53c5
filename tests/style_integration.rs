// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use fluid_nav::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
    use fluid_nav::ui::styles::button;
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test the bar icon style across statuses
        let _ = button::bar_icon(&theme, iced::widget::button::Status::Active);
        let _ = button::bar_icon(&theme, iced::widget::button::Status::Hovered);
        let _ = button::bar_icon(&theme, iced::widget::button::Status::Pressed);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::NAVY;
        let _ = palette::SECONDARY;

        // Spacing
        let _ = spacing::DEFAULT;

        // Opacity
        let _ = opacity::HALF;

        // Sizing
        let _ = sizing::FAB_SIZE;

        // Radius
        let _ = radius::DIAMOND;
    }

    #[test]
    fn fab_geometry_is_coherent() {
        // The decoration square must poke above the bar so the collapsed
        // stack has a backdrop, and the diamond radius must leave straight
        // edge segments on each side.
        let decor_half_diagonal = sizing::BAR_DECOR_SIZE / 2.0 * std::f32::consts::SQRT_2;
        assert!(decor_half_diagonal > sizing::BAR_HEIGHT / 2.0);
        assert!(radius::DIAMOND * 2.0 < sizing::FAB_SIZE);
    }
}
