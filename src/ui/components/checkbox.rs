// SPDX-License-Identifier: MPL-2.0
//! Checkbox primitive with an optional description line.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{checkbox, text, Column, Text};
use iced::{Element, Theme};

/// Builder for a labeled checkbox element.
pub struct Checkbox<Message> {
    label: String,
    checked: bool,
    description: Option<String>,
    on_toggle: Option<Box<dyn Fn(bool) -> Message>>,
}

impl<Message: Clone + 'static> Checkbox<Message> {
    /// Creates a checkbox with the given label and state.
    #[must_use]
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
            description: None,
            on_toggle: None,
        }
    }

    /// Adds a secondary description line under the label.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the toggle handler. Without one the checkbox renders disabled.
    #[must_use]
    pub fn on_toggle(mut self, handler: impl Fn(bool) -> Message + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Builds the element.
    pub fn view(self) -> Element<'static, Message> {
        let mut widget = checkbox(self.checked)
            .label(self.label)
            .size(typography::BODY_LG);

        if let Some(handler) = self.on_toggle {
            widget = widget.on_toggle(handler);
        }

        match self.description {
            Some(description) => {
                let hint = Text::new(description)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.strong.text),
                    });

                Column::new()
                    .spacing(spacing::XXS)
                    .push(widget)
                    .push(hint)
                    .into()
            }
            None => widget.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Toggled(bool),
    }

    #[test]
    fn builder_produces_element() {
        let _: Element<'_, TestMessage> = Checkbox::new("Subscribe", true)
            .description("Monthly digest, no spam.")
            .on_toggle(TestMessage::Toggled)
            .view();
    }

    #[test]
    fn checkbox_without_handler_still_renders() {
        let _: Element<'_, TestMessage> = Checkbox::new("Read only", false).view();
    }
}
