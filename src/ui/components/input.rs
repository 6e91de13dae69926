// SPDX-License-Identifier: MPL-2.0
//! Tokenized text input primitive.
//!
//! Wraps `iced::widget::text_input` with the shared sizing scale and an
//! `invalid` flag that swaps the border to the danger color.

use crate::ui::styles::{input as input_styles, ControlSize};
use iced::widget::text_input;
use iced::{Element, Length};

/// Builder for a single-line text input element.
pub struct Input<'a, Message> {
    placeholder: String,
    value: &'a str,
    size: ControlSize,
    invalid: bool,
    full_width: bool,
    on_input: Option<Box<dyn Fn(String) -> Message + 'a>>,
    on_submit: Option<Message>,
}

impl<'a, Message: Clone + 'a> Input<'a, Message> {
    /// Creates an input showing `value` with the given placeholder.
    #[must_use]
    pub fn new(placeholder: impl Into<String>, value: &'a str) -> Self {
        Self {
            placeholder: placeholder.into(),
            value,
            size: ControlSize::default(),
            invalid: false,
            full_width: true,
            on_input: None,
            on_submit: None,
        }
    }

    /// Toggles padding and typography scale.
    #[must_use]
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Marks the input as failing validation.
    #[must_use]
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Shrinks the input to its content width instead of filling.
    #[must_use]
    pub fn shrink(mut self) -> Self {
        self.full_width = false;
        self
    }

    /// Sets the edit handler. Without one the input renders disabled.
    #[must_use]
    pub fn on_input(mut self, handler: impl Fn(String) -> Message + 'a) -> Self {
        self.on_input = Some(Box::new(handler));
        self
    }

    /// Sets the message produced when Enter is pressed.
    #[must_use]
    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Builds the element.
    pub fn view(self) -> Element<'a, Message> {
        let mut widget = text_input(&self.placeholder, self.value)
            .padding(self.size.padding())
            .size(self.size.text_size())
            .style(input_styles::base(self.invalid));

        if let Some(handler) = self.on_input {
            widget = widget.on_input(handler);
        }

        if let Some(message) = self.on_submit {
            widget = widget.on_submit(message);
        }

        if self.full_width {
            widget = widget.width(Length::Fill);
        }

        widget.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Changed(String),
        Submitted,
    }

    #[test]
    fn builder_produces_element() {
        let _: Element<'_, TestMessage> = Input::new("Email", "user@example.com")
            .size(ControlSize::Lg)
            .on_input(TestMessage::Changed)
            .on_submit(TestMessage::Submitted)
            .view();
    }

    #[test]
    fn invalid_input_still_renders() {
        let _: Element<'_, TestMessage> = Input::new("Email", "not-an-email")
            .invalid(true)
            .view();
    }
}
