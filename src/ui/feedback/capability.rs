// SPDX-License-Identifier: MPL-2.0
//! Capabilities the feedback store requires from its host environment.
//!
//! Timers and confirmation dialogs are ambient globals in most UI hosts.
//! Abstracting them behind traits keeps the store testable without a real
//! windowing environment.

use std::fmt;
use std::time::Instant;

/// Source of monotonic time for toast expiry.
pub trait Clock: fmt::Debug {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Production clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Synchronous yes/no confirmation prompt.
pub trait Prompt: fmt::Debug {
    /// Asks the user to confirm and returns their choice unchanged.
    fn confirm(&self, message: &str) -> bool;
}

/// Production prompt backed by a native message dialog.
///
/// Blocks until the user responds, which is a property of the host dialog
/// primitive rather than of the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogPrompt;

impl Prompt for DialogPrompt {
    fn confirm(&self, message: &str) -> bool {
        let result = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Confirm")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();

        matches!(result, rfd::MessageDialogResult::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
