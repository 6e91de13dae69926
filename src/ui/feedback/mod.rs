// SPDX-License-Identifier: MPL-2.0
//! Transient feedback state for a UI surface.
//!
//! This module provides the [`FeedbackStore`], a single-threaded holder of
//! loading/error/toast state that view code binds to, plus the capability
//! traits it needs from its host environment.
//!
//! # Components
//!
//! - [`capability`] - `Clock` and `Prompt` traits with production implementations
//! - [`store`] - `FeedbackStore` with the loading flag, error field, and toast
//! - [`toast`] - Widget functions for rendering the current toast
//!
//! # Usage
//!
//! ```
//! use ansiversa_ui::ui::feedback::{FeedbackStore, Message, ToastKind};
//!
//! let mut store = FeedbackStore::new();
//!
//! // Reflect an async operation's outcome
//! store.set_loading(false);
//! store.notify(ToastKind::Success, "Saved");
//!
//! // Drive auto-dismissal from the host's periodic tick
//! store.handle_message(&Message::Tick);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 2.5s, overridable via [`FeedbackStore::with_dismiss_delay`]
//! - Errors persist until explicitly cleared; the store never clears them itself
//! - All timing flows through the injected [`capability::Clock`], so the store
//!   is testable without a running event loop

pub mod capability;
mod store;
pub mod toast;

pub use capability::{Clock, DialogPrompt, Prompt, SystemClock};
pub use store::{
    safe_error_message, safe_error_message_or, FeedbackStore, Message, Toast, ToastKind,
    DEFAULT_TOAST_DISMISS_DELAY, GENERIC_ERROR_MESSAGE,
};
