//! Property tests for the guard state machine.
//!
//! Guess sequences are generated as a mix of the real secret and arbitrary
//! byte strings, then replayed against a guard and a plain counter model.

use proptest::prelude::*;
use secretguard_core::{Guard, GuessOutcome, INITIAL_ATTEMPTS};

/// Either the secret itself or some arbitrary bytes.
#[derive(Debug, Clone)]
enum Guess {
    Secret,
    Other(Vec<u8>),
}

fn guess_strategy() -> impl Strategy<Value = Guess> {
    prop_oneof![
        1 => Just(Guess::Secret),
        3 => proptest::collection::vec(any::<u8>(), 0..48).prop_map(Guess::Other),
    ]
}

proptest! {
    #[test]
    fn prop_guard_tracks_counter_model(
        secret in proptest::collection::vec(any::<u8>(), 0..48),
        guesses in proptest::collection::vec(guess_strategy(), 0..16),
    ) {
        let mut guard = Guard::new(&secret);
        let mut model = INITIAL_ATTEMPTS;

        for guess in guesses {
            let bytes = match guess {
                Guess::Secret => secret.clone(),
                Guess::Other(bytes) => bytes,
            };
            let before = guard.remaining();
            let outcome = guard.attempt(&bytes);

            if model == 0 {
                prop_assert_eq!(outcome, GuessOutcome::Locked);
            } else if bytes == secret {
                prop_assert_eq!(outcome, GuessOutcome::Matched);
            } else {
                model -= 1;
                prop_assert_eq!(outcome, GuessOutcome::Mismatched { remaining: model });
                prop_assert_eq!(guard.remaining(), before - 1);
            }

            prop_assert_eq!(guard.remaining(), model);
            prop_assert!(guard.remaining() <= INITIAL_ATTEMPTS);
            prop_assert_eq!(guard.is_locked(), model == 0);
        }
    }

    #[test]
    fn prop_secret_always_matches_while_active(
        secret in ".{0,64}",
        repeats in 1usize..10,
    ) {
        let mut guard = Guard::new(&secret);
        for _ in 0..repeats {
            prop_assert!(guard.try_match(&secret));
        }
        prop_assert_eq!(guard.remaining(), INITIAL_ATTEMPTS);
    }

    #[test]
    fn prop_locked_rejects_everything(
        secret in proptest::collection::vec(any::<u8>(), 0..32),
        probe in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut guard = Guard::new(&secret);
        let mut wrong = secret.clone();
        wrong.push(0);
        for _ in 0..INITIAL_ATTEMPTS {
            guard.try_match(&wrong);
        }

        prop_assert!(guard.is_locked());
        prop_assert!(!guard.try_match(&secret));
        prop_assert!(!guard.try_match(&probe));
        prop_assert_eq!(guard.remaining(), 0);
    }

    #[test]
    fn prop_single_byte_flip_never_matches(
        secret in proptest::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut guard = Guard::new(&secret);
        let mut guess = secret.clone();
        let i = index.index(guess.len());
        guess[i] ^= flip;

        prop_assert!(!guard.try_match(&guess));
        prop_assert_eq!(guard.remaining(), INITIAL_ATTEMPTS - 1);
    }

    #[test]
    fn prop_length_difference_never_matches(
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        extra in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut guard = Guard::new(&secret);

        let mut longer = secret.clone();
        longer.extend_from_slice(&extra);
        prop_assert!(!guard.try_match(&longer));

        if !secret.is_empty() {
            prop_assert!(!guard.try_match(&secret[..secret.len() - 1]));
        }
    }
}
