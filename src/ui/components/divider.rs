// SPDX-License-Identifier: MPL-2.0
//! Horizontal divider primitive.

use crate::ui::design_tokens::border;
use iced::widget::rule::horizontal as horizontal_rule;
use iced::Element;

/// A thin horizontal separator.
pub fn divider<'a, Message: 'a>() -> Element<'a, Message> {
    horizontal_rule(border::WIDTH_SM).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {}

    #[test]
    fn divider_renders() {
        let _: Element<'_, TestMessage> = divider();
    }
}
