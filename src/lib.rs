// SPDX-License-Identifier: MPL-2.0
//! `ansiversa_ui` is a tokenized UI component library built with the Iced GUI framework.
//!
//! It provides reusable visual primitives (buttons, inputs, cards, a navigation bar),
//! a centralized design-token system, a feedback store for loading/error/toast state,
//! and a self-describing component catalog.

#![doc(html_root_url = "https://docs.rs/ansiversa_ui/0.1.0")]

pub mod catalog;
pub mod config;
pub mod error;
pub mod test_utils;
pub mod ui;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
