// SPDX-License-Identifier: MPL-2.0
//! Card primitive: a bordered surface with optional header and footer rows.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{rule::horizontal as horizontal_rule, Column, Container, Text};
use iced::{Element, Length};

use crate::ui::styles::container as container_styles;

/// Builder for a card element.
pub struct Card<'a, Message> {
    header: Option<String>,
    body: Element<'a, Message>,
    footer: Option<Element<'a, Message>>,
    max_width: f32,
}

impl<'a, Message: 'a> Card<'a, Message> {
    /// Creates a card around the given body content.
    #[must_use]
    pub fn new(body: impl Into<Element<'a, Message>>) -> Self {
        Self {
            header: None,
            body: body.into(),
            footer: None,
            max_width: sizing::CARD_MAX_WIDTH,
        }
    }

    /// Adds a title row above the body.
    #[must_use]
    pub fn header(mut self, title: impl Into<String>) -> Self {
        self.header = Some(title.into());
        self
    }

    /// Adds a footer row below the body (actions, metadata).
    #[must_use]
    pub fn footer(mut self, footer: impl Into<Element<'a, Message>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Overrides the maximum card width.
    #[must_use]
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = width;
        self
    }

    /// Builds the element.
    pub fn view(self) -> Element<'a, Message> {
        let mut content = Column::new().spacing(spacing::SM);

        if let Some(title) = self.header {
            content = content
                .push(Text::new(title).size(typography::TITLE_SM))
                .push(horizontal_rule(1));
        }

        content = content.push(self.body);

        if let Some(footer) = self.footer {
            content = content.push(horizontal_rule(1)).push(footer);
        }

        Container::new(content)
            .padding(spacing::MD)
            .max_width(self.max_width)
            .width(Length::Fill)
            .style(container_styles::card)
            .into()
    }
}
