//! Guard state machine.
//!
//! States: ACTIVE(3) → ACTIVE(2) → ACTIVE(1) → LOCKED
//!
//! Only an incorrect guess moves the machine forward. A correct guess is free.
//! LOCKED is absorbing: every guess is rejected, including the correct one.
//! No reset. No recovery.

use std::fmt;

use crate::secret::Secret;

/// Incorrect guesses tolerated before the guard locks.
pub const INITIAL_ATTEMPTS: u8 = 3;

/// Derived guard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Accepting guesses. Holds the remaining attempts (1..=3).
    Active(u8),
    /// Attempts exhausted. Final state.
    Locked,
}

/// Result of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess equals the secret. No attempt consumed.
    Matched,
    /// Guess differs from the secret. One attempt consumed.
    Mismatched {
        /// Attempts left after this guess. Zero means the guard just locked.
        remaining: u8,
    },
    /// Guard was already locked. The guess was not compared.
    Locked,
}

impl GuessOutcome {
    /// True only for [`GuessOutcome::Matched`].
    pub fn is_match(self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// A bounded-attempt secret guard.
///
/// Holds an immutable secret and a counter of incorrect guesses still
/// tolerated. Once the counter hits zero the guard rejects everything.
///
/// This type does not implement `Clone`: a copy would carry a fresh
/// attempt budget for the same secret.
pub struct Guard {
    secret: Secret,
    remaining: u8,
}

impl Guard {
    /// Create a guard for `secret` with [`INITIAL_ATTEMPTS`] attempts.
    ///
    /// Any byte sequence is accepted, including the empty one.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Secret::new(secret),
            remaining: INITIAL_ATTEMPTS,
        }
    }

    /// Check a guess and report whether it matched.
    ///
    /// Returns `false` both for a wrong guess and for any guess once locked.
    /// Use [`Guard::attempt`] to tell the two apart.
    pub fn try_match(&mut self, guess: impl AsRef<[u8]>) -> bool {
        self.attempt(guess).is_match()
    }

    /// Check a guess and report the full outcome.
    ///
    /// Order matters: the lockout check comes before the comparison, so a
    /// locked guard never compares, and never matches.
    pub fn attempt(&mut self, guess: impl AsRef<[u8]>) -> GuessOutcome {
        if self.is_locked() {
            tracing::debug!("guess rejected: guard locked");
            return GuessOutcome::Locked;
        }

        if self.secret.matches(guess.as_ref()) {
            return GuessOutcome::Matched;
        }

        self.remaining = self.remaining.saturating_sub(1);
        tracing::debug!(remaining = self.remaining, "guess rejected: mismatch");
        if self.remaining == 0 {
            tracing::info!("guard locked: attempts exhausted");
        }

        GuessOutcome::Mismatched {
            remaining: self.remaining,
        }
    }

    /// Incorrect guesses still tolerated (0..=3).
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Get current state.
    pub fn state(&self) -> GuardState {
        match self.remaining {
            0 => GuardState::Locked,
            n => GuardState::Active(n),
        }
    }

    /// True once the attempts are exhausted.
    pub fn is_locked(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("secret", &self.secret)
            .field("remaining", &self.remaining)
            .finish()
    }
}
