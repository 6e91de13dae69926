// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`components`] - Visual primitives (button, input, checkbox, card, divider)
//! - [`navbar`] - Navigation bar with brand, links, and call-to-action buttons
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//!
//! # Shared Infrastructure
//!
//! - [`feedback`] - Loading/error/toast state for a UI surface
//! - [`styles`] - Centralized styling (buttons, inputs, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod feedback;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod widgets;
