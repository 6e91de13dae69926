// SPDX-License-Identifier: MPL-2.0
//! Reusable visual primitives.
//!
//! Each component is a small builder that collects its configuration and
//! produces an Iced `Element` from `view()`. Styling always goes through
//! [`crate::ui::styles`] and [`crate::ui::design_tokens`]; components never
//! hard-code colors or sizes.

pub mod button;
pub mod card;
pub mod checkbox;
pub mod divider;
pub mod input;

pub use button::Button;
pub use card::Card;
pub use checkbox::Checkbox;
pub use divider::divider;
pub use input::Input;
