// SPDX-License-Identifier: MPL-2.0
//! Tokenized button primitive.
//!
//! Supports solid, outline, soft, ghost, and link variants along with
//! sm/md/lg sizing.
//!
//! # Usage
//!
//! ```
//! use ansiversa_ui::ui::components::Button;
//! use ansiversa_ui::ui::styles::{button::ButtonVariant, ControlSize};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Save,
//! }
//!
//! let save = Button::new("Save")
//!     .variant(ButtonVariant::Solid)
//!     .size(ControlSize::Md)
//!     .on_press(Message::Save)
//!     .view();
//! # let _: iced::Element<'_, Message> = save;
//! ```

use crate::ui::styles::button::{variant as variant_style, ButtonVariant};
use crate::ui::styles::ControlSize;
use iced::widget::{button, Text};
use iced::{Element, Length};

/// Builder for a button element.
pub struct Button<Message> {
    label: String,
    variant: ButtonVariant,
    size: ControlSize,
    full_width: bool,
    on_press: Option<Message>,
}

impl<Message: Clone + 'static> Button<Message> {
    /// Creates a button with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ControlSize::default(),
            full_width: false,
            on_press: None,
        }
    }

    /// Selects the visual treatment.
    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Toggles padding and typography scale.
    #[must_use]
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Expands the button to fill available horizontal space.
    #[must_use]
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Sets the press message. Without one the button renders disabled.
    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Builds the element.
    pub fn view(self) -> Element<'static, Message> {
        let label = Text::new(self.label).size(self.size.text_size());

        let mut widget = button(label)
            .padding(self.size.padding())
            .style(variant_style(self.variant));

        if let Some(message) = self.on_press {
            widget = widget.on_press(message);
        }

        if self.full_width {
            widget = widget.width(Length::Fill);
        }

        widget.into()
    }
}
