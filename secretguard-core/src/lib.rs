//! SecretGuard Core
//!
//! A bounded-attempt secret matching guard.
//!
//! This crate provides:
//! - An immutable, zeroizing secret with exact byte comparison
//! - A guard state machine with a fixed budget of incorrect guesses
//!
//! # Invariants
//!
//! - Comparison is raw byte equality: case-sensitive, no trimming, no
//!   Unicode normalization, no length cap
//! - Correct guesses never consume an attempt
//! - Lockout is irrevocable: once locked, even the correct guess fails
//! - No operation can fail; every input takes the comparison path
//! - Best-effort zeroization of the secret on drop

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod guard;
pub mod secret;

pub use guard::{Guard, GuardState, GuessOutcome, INITIAL_ATTEMPTS};
pub use secret::Secret;
