// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use ansiversa_ui::ui::design_tokens::{opacity, palette, sizing, spacing};
    use ansiversa_ui::ui::styles::{button, ControlSize};
    use ansiversa_ui::ui::theming::ThemeMode;
    use iced::Theme;

    #[test]
    fn all_button_variants_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button variant styles compile and are callable
        for v in [
            button::ButtonVariant::Solid,
            button::ButtonVariant::Outline,
            button::ButtonVariant::Soft,
            button::ButtonVariant::Ghost,
            button::ButtonVariant::Link,
        ] {
            let _ = button::variant(v)(&theme, iced::widget::button::Status::Active);
            let _ = button::variant(v)(&theme, iced::widget::button::Status::Hovered);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::DISABLED;

        // Sizing
        let _ = sizing::CONTROL_MD;
    }

    #[test]
    fn control_sizes_map_onto_sizing_tokens() {
        assert_eq!(ControlSize::Sm.height(), sizing::CONTROL_SM);
        assert_eq!(ControlSize::Md.height(), sizing::CONTROL_MD);
        assert_eq!(ControlSize::Lg.height(), sizing::CONTROL_LG);
    }

    #[test]
    fn theme_mode_drives_style_output() {
        let light = ThemeMode::Light.iced_theme();
        let dark = ThemeMode::Dark.iced_theme();

        // Outline buttons pick their text color off the resolved theme
        let light_style = button::outline(&light, iced::widget::button::Status::Active);
        let dark_style = button::outline(&dark, iced::widget::button::Status::Active);
        assert_ne!(light_style.text_color, dark_style.text_color);
    }
}
