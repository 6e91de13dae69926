// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.
//!
//! Toasts are the visual representation of the store's transient
//! notification, appearing as a small card with a kind-colored accent.

use super::store::{FeedbackStore, Message, Toast};
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let accent_color = toast.kind.color();

    let message_widget = Text::new(toast.message.as_str())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    // Layout: [accent dot] [message]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(text(""))
                .width(Length::Fixed(spacing::XS))
                .height(Length::Fixed(spacing::XS))
                .style(move |_theme: &Theme| accent_dot_style(accent_color)),
        )
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the toast overlay for a feedback store.
///
/// Positions the toast in the bottom-right corner; renders an empty,
/// zero-sized container when no toast is active.
pub fn view_overlay(store: &FeedbackStore) -> Element<'_, Message> {
    match store.toast() {
        Some(toast) => Container::new(view(toast))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
        None => Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the kind-colored accent dot.
fn accent_dot_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent_color)),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::feedback::ToastKind;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn accent_dot_matches_toast_kind() {
        let style = accent_dot_style(ToastKind::Error.color());

        if let Some(iced::Background::Color(color)) = style.background {
            assert_eq!(color, palette::DANGER_500);
        } else {
            panic!("Expected background color");
        }
    }
}
