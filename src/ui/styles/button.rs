// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Each [`ButtonVariant`] maps to a style function keyed off the Iced theme
//! and button status, replacing per-call-site color choices.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the brand color (primary action).
    #[default]
    Solid,
    /// Transparent with a visible border.
    Outline,
    /// Muted surface fill, no border emphasis.
    Soft,
    /// No fill or border until hovered.
    Ghost,
    /// Rendered like inline text in the brand color.
    Link,
}

/// Returns the style function for the given variant.
pub fn variant(variant: ButtonVariant) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match variant {
        ButtonVariant::Solid => solid(theme, status),
        ButtonVariant::Outline => outline(theme, status),
        ButtonVariant::Soft => soft(theme, status),
        ButtonVariant::Ghost => ghost(theme, status),
        ButtonVariant::Link => link(theme, status),
    }
}

/// Style for solid (primary action) buttons.
pub fn solid(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Style for outline (secondary action) buttons.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = if is_light { palette::GRAY_900 } else { WHITE };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: None,
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(muted_surface(is_light))),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Style for soft (muted fill) buttons.
pub fn soft(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = if is_light { palette::GRAY_900 } else { WHITE };

    let background = match status {
        button::Status::Hovered => hover_surface(is_light),
        _ => muted_surface(is_light),
    };

    match status {
        button::Status::Disabled => disabled(theme),
        _ => button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for ghost (borderless) buttons.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = if is_light {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: None,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: if is_light { palette::GRAY_900 } else { WHITE },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Style for link-like buttons.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: None,
            text_color: palette::PRIMARY_400,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active => button::Style {
            background: None,
            text_color: palette::PRIMARY_500,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Shared disabled appearance (grayed out, non-interactive).
fn disabled(theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: Color {
            a: opacity::DISABLED,
            ..palette::GRAY_400
        },
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn muted_surface(is_light: bool) -> Color {
    if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    }
}

fn hover_surface(is_light: bool) -> Color {
    if is_light {
        palette::GRAY_200
    } else {
        Color::from_rgb(0.35, 0.35, 0.35)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = solid(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn outline_button_has_no_fill_at_rest() {
        let theme = Theme::Light;
        let style = outline(&theme, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.border.color, palette::GRAY_400);
    }

    #[test]
    fn ghost_button_gains_fill_on_hover() {
        let theme = Theme::Dark;
        let rest = ghost(&theme, button::Status::Active);
        let hover = ghost(&theme, button::Status::Hovered);
        assert!(rest.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn link_button_uses_brand_text() {
        let theme = Theme::Light;
        let style = link(&theme, button::Status::Active);
        assert_eq!(style.text_color, palette::PRIMARY_500);
        assert!(style.background.is_none());
    }

    #[test]
    fn all_variants_share_disabled_appearance() {
        let theme = Theme::Light;
        let variants = [
            ButtonVariant::Solid,
            ButtonVariant::Outline,
            ButtonVariant::Soft,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
        ];

        let reference = variant(ButtonVariant::Solid)(&theme, button::Status::Disabled);
        for v in variants {
            let style = variant(v)(&theme, button::Status::Disabled);
            assert_eq!(style.background, reference.background);
            assert_eq!(style.text_color, reference.text_color);
        }
    }
}
