// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod input;

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::Padding;

/// Control sizing shared by buttons, inputs, and other form elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ControlSize {
    /// Returns the inner padding for this control size.
    #[must_use]
    pub fn padding(self) -> Padding {
        match self {
            ControlSize::Sm => Padding::from([spacing::XXS + 2.0, spacing::SM]),
            ControlSize::Md => Padding::from([spacing::XS, spacing::MD]),
            ControlSize::Lg => Padding::from([spacing::SM, spacing::LG]),
        }
    }

    /// Returns the text size for this control size.
    #[must_use]
    pub fn text_size(self) -> f32 {
        match self {
            ControlSize::Sm | ControlSize::Md => typography::BODY,
            ControlSize::Lg => typography::BODY_LG,
        }
    }

    /// Returns the minimum control height for this size.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            ControlSize::Sm => sizing::CONTROL_SM,
            ControlSize::Md => sizing::CONTROL_MD,
            ControlSize::Lg => sizing::CONTROL_LG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_grows_with_control_size() {
        assert!(ControlSize::Lg.text_size() > ControlSize::Sm.text_size());
        assert_eq!(ControlSize::Sm.text_size(), ControlSize::Md.text_size());
    }

    #[test]
    fn heights_follow_sizing_tokens() {
        assert_eq!(ControlSize::Md.height(), sizing::CONTROL_MD);
        assert!(ControlSize::Lg.height() > ControlSize::Md.height());
    }
}
