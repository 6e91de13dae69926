// SPDX-License-Identifier: MPL-2.0
//! The feedback store: loading flag, error message, and auto-dismissing toast.

use super::capability::{Clock, DialogPrompt, Prompt, SystemClock};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays visible before its scheduled clear fires.
pub const DEFAULT_TOAST_DISMISS_DELAY: Duration = Duration::from_millis(2500);

/// Fallback text shown when an error carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Kind of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::DANGER_500,
        }
    }
}

/// A transient notification surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Messages for feedback state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Tick for checking the toast auto-dismiss timer.
    Tick,
}

/// A scheduled toast clear, keyed by the message it was scheduled for.
#[derive(Debug)]
struct PendingClear {
    message: String,
    due_at: Instant,
}

/// Holds transient UI feedback state for one surface.
///
/// One instance lives per UI surface for as long as that surface is active.
/// The three fields transition independently: the loading flag is entirely
/// caller-driven, the error persists until explicitly cleared, and the toast
/// clears itself after [`DEFAULT_TOAST_DISMISS_DELAY`] via [`tick`].
///
/// [`tick`]: FeedbackStore::tick
#[derive(Debug)]
pub struct FeedbackStore {
    is_loading: bool,
    error: Option<String>,
    toast: Option<Toast>,
    pending: Vec<PendingClear>,
    dismiss_delay: Duration,
    clock: Box<dyn Clock>,
    prompt: Box<dyn Prompt>,
}

impl FeedbackStore {
    /// Creates a store with the production clock and native dialog prompt.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(Box::new(SystemClock), Box::new(DialogPrompt))
    }

    /// Creates a store with explicit capability implementations.
    #[must_use]
    pub fn with_capabilities(clock: Box<dyn Clock>, prompt: Box<dyn Prompt>) -> Self {
        Self {
            is_loading: false,
            error: None,
            toast: None,
            pending: Vec::new(),
            dismiss_delay: DEFAULT_TOAST_DISMISS_DELAY,
            clock,
            prompt,
        }
    }

    /// Overrides the toast dismiss delay.
    #[must_use]
    pub fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_delay = delay;
        self
    }

    /// Returns whether a guarded operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the current toast, if any.
    #[must_use]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Unconditionally overwrites the loading flag.
    ///
    /// There is no automatic transition; the caller resets the flag on
    /// completion or failure of the operation it guards.
    pub fn set_loading(&mut self, value: bool) {
        self.is_loading = value;
    }

    /// Overwrites the error message, or clears it for an absent/empty message.
    ///
    /// No validation or trimming is performed on the content; a
    /// whitespace-only message is stored as-is. The error is never cleared
    /// automatically; it persists until this is called again.
    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message.filter(|m| !m.is_empty());
    }

    /// Clears the error message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Shows a toast and schedules its clear after the dismiss delay.
    ///
    /// The scheduled clear only fires if the toast message at expiry still
    /// equals the message scheduled here, so a stale timer cannot erase a
    /// newer toast with different text. Two toasts with identical text inside
    /// one delay window share that identity and the earlier timer clears the
    /// later toast; this matches the original de-duplication policy and is a
    /// known limitation.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.pending.push(PendingClear {
            message: message.clone(),
            due_at: self.clock.now() + self.dismiss_delay,
        });
        self.toast = Some(Toast { kind, message });
    }

    /// Fires any expired toast clears.
    ///
    /// Should be called periodically (e.g., every 100-500ms) by the host to
    /// drive auto-dismissal.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|clear| now >= clear.due_at);
        self.pending = pending;

        for clear in due {
            if self
                .toast
                .as_ref()
                .is_some_and(|toast| toast.message == clear.message)
            {
                self.toast = None;
            }
        }
    }

    /// Handles a feedback message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick => self.tick(),
        }
    }

    /// Asks the user for a yes/no decision via the prompt capability.
    ///
    /// Returns exactly the boolean the prompt reports, with no transformation.
    #[must_use]
    pub fn confirm(&self, message: &str) -> bool {
        self.prompt.confirm(message)
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes an error-like value into displayable text.
///
/// Returns the error's display text if present and non-blank, otherwise
/// [`GENERIC_ERROR_MESSAGE`]. Never panics.
#[must_use]
pub fn safe_error_message(err: Option<&dyn std::error::Error>) -> String {
    safe_error_message_or(err, GENERIC_ERROR_MESSAGE)
}

/// Like [`safe_error_message`], with an explicit fallback.
#[must_use]
pub fn safe_error_message_or(err: Option<&dyn std::error::Error>, fallback: &str) -> String {
    match err {
        Some(err) => {
            let message = err.to_string();
            if message.trim().is_empty() {
                fallback.to_string()
            } else {
                message
            }
        }
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ManualClock, ScriptedPrompt};
    use std::fmt;

    fn store_with_clock(clock: &ManualClock) -> FeedbackStore {
        FeedbackStore::with_capabilities(
            Box::new(clock.clone()),
            Box::new(ScriptedPrompt::default()),
        )
    }

    #[test]
    fn new_store_is_idle() {
        let store = store_with_clock(&ManualClock::new());
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert!(store.toast().is_none());
    }

    #[test]
    fn set_loading_round_trips() {
        let mut store = store_with_clock(&ManualClock::new());

        store.set_loading(true);
        assert!(store.is_loading());

        store.set_loading(false);
        assert!(!store.is_loading());
    }

    #[test]
    fn set_error_stores_message() {
        let mut store = store_with_clock(&ManualClock::new());

        store.set_error(Some("disk full".to_string()));
        assert_eq!(store.error(), Some("disk full"));
    }

    #[test]
    fn set_error_with_none_clears() {
        let mut store = store_with_clock(&ManualClock::new());

        store.set_error(Some("oops".to_string()));
        store.set_error(None);
        assert!(store.error().is_none());
    }

    #[test]
    fn set_error_with_empty_message_clears() {
        let mut store = store_with_clock(&ManualClock::new());

        store.set_error(Some("oops".to_string()));
        store.set_error(Some(String::new()));
        assert!(store.error().is_none());
    }

    #[test]
    fn set_error_keeps_whitespace_only_message() {
        let mut store = store_with_clock(&ManualClock::new());

        store.set_error(Some("   ".to_string()));
        assert_eq!(store.error(), Some("   "));
    }

    #[test]
    fn clear_error_resets_field() {
        let mut store = store_with_clock(&ManualClock::new());

        store.set_error(Some("oops".to_string()));
        store.clear_error();
        assert!(store.error().is_none());
    }

    #[test]
    fn error_survives_toast_expiry() {
        let clock = ManualClock::new();
        let mut store = store_with_clock(&clock);

        store.set_error(Some("persistent".to_string()));
        store.notify(ToastKind::Success, "Saved");

        clock.advance(DEFAULT_TOAST_DISMISS_DELAY + Duration::from_millis(1));
        store.tick();

        assert!(store.toast().is_none());
        assert_eq!(store.error(), Some("persistent"));
    }

    #[test]
    fn notify_sets_toast_immediately() {
        let mut store = store_with_clock(&ManualClock::new());

        store.notify(ToastKind::Success, "Saved");
        let toast = store.toast().expect("toast should be visible");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Saved");
    }

    #[test]
    fn toast_clears_after_dismiss_delay() {
        let clock = ManualClock::new();
        let mut store = store_with_clock(&clock);

        store.notify(ToastKind::Success, "Saved");

        clock.advance(DEFAULT_TOAST_DISMISS_DELAY - Duration::from_millis(1));
        store.tick();
        assert!(store.toast().is_some());

        clock.advance(Duration::from_millis(1));
        store.tick();
        assert!(store.toast().is_none());
    }

    #[test]
    fn stale_timer_does_not_clear_newer_toast() {
        let clock = ManualClock::new();
        let mut store = store_with_clock(&clock);

        store.notify(ToastKind::Error, "A");
        clock.advance(Duration::from_millis(1000));
        store.notify(ToastKind::Error, "B");

        // First timer window elapses; the toast for "B" must survive
        clock.advance(Duration::from_millis(1600));
        store.handle_message(&Message::Tick);
        let toast = store.toast().expect("newer toast should survive");
        assert_eq!(toast.message, "B");

        // Second timer window elapses; now the toast goes away
        clock.advance(Duration::from_millis(1000));
        store.handle_message(&Message::Tick);
        assert!(store.toast().is_none());
    }

    #[test]
    fn identical_messages_share_one_clear_identity() {
        // Known limitation carried over from the original policy: an earlier
        // timer for the same text clears a later toast early.
        let clock = ManualClock::new();
        let mut store = store_with_clock(&clock);

        store.notify(ToastKind::Success, "Saved");
        clock.advance(Duration::from_millis(1000));
        store.notify(ToastKind::Success, "Saved");

        clock.advance(Duration::from_millis(1600));
        store.tick();
        assert!(store.toast().is_none());
    }

    #[test]
    fn custom_dismiss_delay_is_honored() {
        let clock = ManualClock::new();
        let mut store =
            store_with_clock(&clock).with_dismiss_delay(Duration::from_millis(500));

        store.notify(ToastKind::Success, "Quick");
        clock.advance(Duration::from_millis(501));
        store.tick();
        assert!(store.toast().is_none());
    }

    #[test]
    fn confirm_returns_prompt_answer_unchanged() {
        let prompt = ScriptedPrompt::with_answers([true, false]);
        let store = FeedbackStore::with_capabilities(
            Box::new(ManualClock::new()),
            Box::new(prompt.clone()),
        );

        assert!(store.confirm("Delete item?"));
        assert!(!store.confirm("Really?"));
        assert_eq!(prompt.asked(), vec!["Delete item?", "Really?"]);
    }

    #[derive(Debug)]
    struct BlankError;

    impl fmt::Display for BlankError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "")
        }
    }

    impl std::error::Error for BlankError {}

    #[test]
    fn safe_error_message_uses_error_text() {
        let err = std::io::Error::other("disk full");
        assert_eq!(safe_error_message(Some(&err)), "disk full");
    }

    #[test]
    fn safe_error_message_falls_back_when_absent() {
        assert_eq!(safe_error_message(None), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn safe_error_message_falls_back_on_blank_text() {
        assert_eq!(safe_error_message(Some(&BlankError)), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn safe_error_message_or_uses_custom_fallback() {
        assert_eq!(safe_error_message_or(None, "X"), "X");
    }

    #[test]
    fn toast_kind_colors_are_distinct() {
        assert_ne!(ToastKind::Success.color(), ToastKind::Error.color());
    }
}
