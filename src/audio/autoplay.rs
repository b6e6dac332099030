// SPDX-License-Identifier: MPL-2.0
//! Start-on-first-gesture fallback for automatic playback.
//!
//! Platforms are free to refuse unsolicited playback. When they do, the app
//! waits for the next pointer press anywhere in the window and retries
//! exactly once. The pattern is an explicit state machine rather than a
//! closure holding a removal function, so every transition is inspectable:
//!
//! ```text
//! initial attempt granted ──────────────► Granted
//! initial attempt refused ──► WaitingForGesture
//! WaitingForGesture + gesture, retry ok ─► Granted
//! WaitingForGesture + gesture, refused ──► Abandoned (logged, no more retries)
//! ```
//!
//! `Granted` and `Abandoned` are terminal: further gestures are ignored and
//! the pointer listener is no longer armed.

/// State of the autoplay fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayFallback {
    /// Playback started; nothing left to do.
    Granted,

    /// The initial start was refused; the next pointer press retries.
    WaitingForGesture,

    /// The retry was refused too. Log and stop.
    Abandoned,
}

impl AutoplayFallback {
    /// Resolves the initial, unsolicited start attempt.
    pub fn after_initial(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::WaitingForGesture
        }
    }

    /// True while the pointer listener should be armed.
    pub fn is_waiting(self) -> bool {
        matches!(self, Self::WaitingForGesture)
    }

    /// Resolves the gesture-driven retry. Only meaningful from
    /// `WaitingForGesture`; terminal states absorb the gesture unchanged.
    #[must_use]
    pub fn after_retry(self, granted: bool) -> Self {
        match self {
            Self::WaitingForGesture => {
                if granted {
                    Self::Granted
                } else {
                    Self::Abandoned
                }
            }
            terminal => terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_start_needs_no_listener() {
        let state = AutoplayFallback::after_initial(true);
        assert_eq!(state, AutoplayFallback::Granted);
        assert!(!state.is_waiting());
    }

    #[test]
    fn refused_start_arms_the_listener() {
        let state = AutoplayFallback::after_initial(false);
        assert_eq!(state, AutoplayFallback::WaitingForGesture);
        assert!(state.is_waiting());
    }

    #[test]
    fn first_gesture_resolves_the_wait() {
        let state = AutoplayFallback::WaitingForGesture.after_retry(true);
        assert_eq!(state, AutoplayFallback::Granted);

        let state = AutoplayFallback::WaitingForGesture.after_retry(false);
        assert_eq!(state, AutoplayFallback::Abandoned);
    }

    #[test]
    fn second_gesture_does_nothing() {
        // Retry granted, then another gesture: state stays put either way.
        let state = AutoplayFallback::Granted;
        assert_eq!(state.after_retry(true), AutoplayFallback::Granted);
        assert_eq!(state.after_retry(false), AutoplayFallback::Granted);

        let state = AutoplayFallback::Abandoned;
        assert_eq!(state.after_retry(true), AutoplayFallback::Abandoned);
        assert_eq!(state.after_retry(false), AutoplayFallback::Abandoned);
    }

    #[test]
    fn terminal_states_never_wait() {
        assert!(!AutoplayFallback::Granted.is_waiting());
        assert!(!AutoplayFallback::Abandoned.is_waiting());
    }
}
