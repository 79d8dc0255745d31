//! Passcode gate for protected UI actions
//!
//! Selected actions (settings save, deletions) require a one-time passcode
//! confirmation per session. The gate holds a session-scoped `unlocked` flag
//! and a single deferred-action slot; once the correct passcode has been
//! entered the flag stays set until the process exits. It is never persisted.
//!
//! The gate is a pure state machine, generic over the caller's action type,
//! constructed explicitly with the configured passcode and passed by
//! reference to its consumers. The modal surface that collects the passcode
//! lives in the GUI (`gui::passcode`).

/// Outcome of a passcode verification attempt
#[derive(Debug, PartialEq, Eq)]
pub enum Verification<A> {
    /// Correct passcode: the session is now unlocked and the deferred action,
    /// if one was pending, is released exactly once.
    Unlocked(Option<A>),
    /// Wrong passcode: nothing changed, the challenge stays open.
    Mismatch,
}

/// Session passcode gate with a single deferred-action slot
#[derive(Debug)]
pub struct ProtectionGate<A> {
    passcode: String,
    unlocked: bool,
    pending: Option<A>,
    challenge_open: bool,
}

impl<A> ProtectionGate<A> {
    /// Create a locked gate with the configured passcode
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
            unlocked: false,
            pending: None,
            challenge_open: false,
        }
    }

    /// Gate an action behind the passcode challenge.
    ///
    /// Returns `Some(action)` when the session is already unlocked: the
    /// caller runs it synchronously and immediately. Otherwise the action is
    /// parked as the single pending action - overwriting any previous one -
    /// the challenge is opened, and `None` is returned.
    pub fn guard(&mut self, action: A) -> Option<A> {
        if self.unlocked {
            return Some(action);
        }

        if self.pending.is_some() {
            tracing::debug!("replacing pending protected action");
        }
        self.pending = Some(action);
        self.challenge_open = true;
        None
    }

    /// Check a passcode attempt.
    ///
    /// Exact string match unlocks the session for its remainder, closes the
    /// challenge and releases the pending action. A mismatch changes nothing;
    /// the operator may retry without limit.
    pub fn verify(&mut self, input: &str) -> Verification<A> {
        if input != self.passcode {
            return Verification::Mismatch;
        }

        self.unlocked = true;
        self.challenge_open = false;
        Verification::Unlocked(self.pending.take())
    }

    /// Dismiss the challenge without verifying.
    ///
    /// The pending action is discarded without being released; the unlocked
    /// flag keeps its prior value.
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.challenge_open = false;
    }

    /// Whether the session has been unlocked
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether a challenge is currently presented
    pub fn challenge_open(&self) -> bool {
        self.challenge_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSCODE: &str = "1234";

    fn gate() -> ProtectionGate<&'static str> {
        ProtectionGate::new(PASSCODE)
    }

    #[test]
    fn test_guard_defers_while_locked() {
        let mut gate = gate();
        assert_eq!(gate.guard("delete"), None);
        assert!(gate.challenge_open());
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_wrong_passcode_changes_nothing() {
        let mut gate = gate();
        gate.guard("delete");

        for _ in 0..5 {
            assert_eq!(gate.verify("0000"), Verification::Mismatch);
            assert!(!gate.is_unlocked());
            assert!(gate.challenge_open());
        }
    }

    #[test]
    fn test_correct_passcode_releases_action_once() {
        let mut gate = gate();
        gate.guard("delete");

        assert_eq!(gate.verify("0000"), Verification::Mismatch);
        assert_eq!(gate.verify(PASSCODE), Verification::Unlocked(Some("delete")));
        assert!(gate.is_unlocked());
        assert!(!gate.challenge_open());

        // The slot was cleared; a second verify releases nothing
        assert_eq!(gate.verify(PASSCODE), Verification::Unlocked(None));
    }

    #[test]
    fn test_unlocked_gate_passes_actions_through() {
        let mut gate = gate();
        gate.guard("first");
        gate.verify(PASSCODE);

        assert_eq!(gate.guard("second"), Some("second"));
        assert!(!gate.challenge_open());
    }

    #[test]
    fn test_unlock_without_pending_action() {
        let mut gate = gate();
        assert_eq!(gate.verify(PASSCODE), Verification::Unlocked(None));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_second_guard_replaces_pending() {
        let mut gate = gate();
        gate.guard("first");
        gate.guard("second");

        assert_eq!(gate.verify(PASSCODE), Verification::Unlocked(Some("second")));
    }

    #[test]
    fn test_dismiss_discards_pending_and_stays_locked() {
        let mut gate = gate();
        gate.guard("delete");
        gate.dismiss();

        assert!(!gate.challenge_open());
        assert!(!gate.is_unlocked());
        // Unlocking later must not resurrect the discarded action
        assert_eq!(gate.verify(PASSCODE), Verification::Unlocked(None));
    }

    #[test]
    fn test_dismiss_after_unlock_keeps_unlocked() {
        let mut gate = gate();
        gate.verify(PASSCODE);
        gate.dismiss();
        assert!(gate.is_unlocked());
    }
}
