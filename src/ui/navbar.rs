// SPDX-License-Identifier: MPL-2.0
//! Navigation bar component.
//!
//! Renders a brand, a collection of nav links, and up to two call-to-action
//! buttons. A collapsible menu mirrors the links for narrow hosts; the open
//! flag lives in the caller's state and is driven through [`update`].

use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles::button::ButtonVariant;
use crate::ui::styles::{button as button_styles, container as container_styles, ControlSize};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// A single navigation entry.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    /// Marks the link matching the current page.
    pub current: bool,
}

impl NavLink {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            current: false,
        }
    }

    #[must_use]
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }
}

/// A call-to-action rendered beside the links.
#[derive(Debug, Clone)]
pub struct NavAction {
    pub label: String,
    pub variant: ButtonVariant,
}

impl NavAction {
    #[must_use]
    pub fn new(label: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub brand: &'a str,
    pub links: &'a [NavLink],
    pub primary_action: Option<&'a NavAction>,
    pub secondary_action: Option<&'a NavAction>,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LinkActivated(usize),
    PrimaryAction,
    SecondaryAction,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LinkActivated(usize),
    PrimaryAction,
    SecondaryAction,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::LinkActivated(index) => {
            *menu_open = false;
            Event::LinkActivated(index)
        }
        Message::PrimaryAction => {
            *menu_open = false;
            Event::PrimaryAction
        }
        Message::SecondaryAction => {
            *menu_open = false;
            Event::SecondaryAction
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_bar(&ctx));

    // Collapsed menu (if open)
    if ctx.menu_open {
        content = content.push(build_menu(&ctx));
    }

    content.into()
}

/// Build the horizontal bar: brand, links, spacer, actions, menu toggle.
fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_string()).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand);

    for (index, link) in ctx.links.iter().enumerate() {
        row = row.push(build_link(index, link));
    }

    row = row.push(Space::new().width(Length::Fill));

    if let Some(action) = ctx.secondary_action {
        row = row.push(build_action(action, Message::SecondaryAction));
    }

    if let Some(action) = ctx.primary_action {
        row = row.push(build_action(action, Message::PrimaryAction));
    }

    let menu_button = button(Text::new("Menu").size(typography::BODY_SM))
        .on_press(Message::ToggleMenu)
        .padding(ControlSize::Sm.padding())
        .style(button_styles::variant(ButtonVariant::Ghost));
    row = row.push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .style(container_styles::navbar)
        .into()
}

/// Build a single nav link; the current link is highlighted.
fn build_link(index: usize, link: &NavLink) -> Element<'_, Message> {
    let variant = if link.current {
        ButtonVariant::Link
    } else {
        ButtonVariant::Ghost
    };

    button(Text::new(link.label.as_str()).size(typography::BODY))
        .on_press(Message::LinkActivated(index))
        .padding(ControlSize::Sm.padding())
        .style(button_styles::variant(variant))
        .into()
}

/// Build a call-to-action button.
fn build_action(action: &NavAction, message: Message) -> Element<'_, Message> {
    button(Text::new(action.label.as_str()).size(typography::BODY))
        .on_press(message)
        .padding(ControlSize::Sm.padding())
        .style(button_styles::variant(action.variant))
        .into()
}

/// Build the collapsed menu that mirrors the nav links vertically.
fn build_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for (index, link) in ctx.links.iter().enumerate() {
        let item = button(Text::new(link.label.as_str()))
            .on_press(Message::LinkActivated(index))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(button_styles::variant(ButtonVariant::Ghost));
        menu_column = menu_column.push(item);
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_flag_without_event() {
        let mut menu_open = false;

        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);

        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn link_activation_closes_menu_and_reports_index() {
        let mut menu_open = true;

        let event = update(Message::LinkActivated(2), &mut menu_open);
        assert_eq!(event, Event::LinkActivated(2));
        assert!(!menu_open);
    }

    #[test]
    fn actions_close_menu_and_propagate() {
        let mut menu_open = true;
        assert_eq!(
            update(Message::PrimaryAction, &mut menu_open),
            Event::PrimaryAction
        );

        menu_open = true;
        assert_eq!(
            update(Message::SecondaryAction, &mut menu_open),
            Event::SecondaryAction
        );
        assert!(!menu_open);
    }

    #[test]
    fn view_renders_with_links_and_actions() {
        let links = vec![
            NavLink::new("Overview").current(),
            NavLink::new("Components"),
        ];
        let primary = NavAction::new("Login", ButtonVariant::Solid);
        let secondary = NavAction::new("Register", ButtonVariant::Outline);

        let _ = view(ViewContext {
            brand: "Ansiversa",
            links: &links,
            primary_action: Some(&primary),
            secondary_action: Some(&secondary),
            menu_open: true,
        });
    }
}
