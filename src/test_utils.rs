// SPDX-License-Identifier: MPL-2.0
//! Test utilities: controllable capability implementations.
//!
//! These doubles let feedback-store behavior be tested deterministically,
//! without a real timer or a native dialog. They are `Rc`-backed so a test
//! can keep a handle after handing a clone to the store.

use crate::ui::feedback::{Clock, Prompt};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Clock that only advances when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Prompt that replays a scripted sequence of answers and records questions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: Rc<RefCell<VecDeque<bool>>>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompt {
    /// Creates a prompt that will answer with `answers` in order,
    /// then `false` once the script is exhausted.
    #[must_use]
    pub fn with_answers(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Rc::new(RefCell::new(answers.into_iter().collect())),
            asked: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the messages that have been asked so far.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_on_demand() {
        let clock = ManualClock::new();
        let start = clock.now();

        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.now() - start, Duration::from_secs(5));
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();

        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), other.now());
    }

    #[test]
    fn scripted_prompt_replays_answers_then_declines() {
        let prompt = ScriptedPrompt::with_answers([true, false]);

        assert!(prompt.confirm("first?"));
        assert!(!prompt.confirm("second?"));
        assert!(!prompt.confirm("third?"));
        assert_eq!(prompt.asked(), vec!["first?", "second?", "third?"]);
    }
}
