//! Zeroizing secret wrapper.
//!
//! The secret is stored as raw bytes, exactly as given. No trimming, no
//! case-folding, no normalization, no length cap.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// The reference value a guard compares guesses against.
///
/// This type does not implement `Clone` to prevent accidental duplication.
/// The bytes are zeroized on drop.
pub struct Secret(Zeroizing<Vec<u8>>);

impl Secret {
    /// Create a secret from raw bytes or a string.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self(Zeroizing::new(bytes.as_ref().to_vec()))
    }

    /// Secret length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact byte equality.
    ///
    /// Different lengths never match. Equal-length inputs are compared
    /// without an early exit on the first differing byte.
    pub fn matches(&self, guess: &[u8]) -> bool {
        bool::from(self.0.as_slice().ct_eq(guess))
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<redacted {} bytes>)", self.0.len())
    }
}

// Explicitly NOT implementing Clone to prevent secret duplication
// impl Clone for Secret { ... } // FORBIDDEN
