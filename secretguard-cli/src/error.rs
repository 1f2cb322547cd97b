//! CLI errors.

use thiserror::Error;

/// Errors from the terminal host.
///
/// The guard itself never fails. These cover configuration and the
/// stdin/stdout plumbing around it.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither `--secret`, `SECRETGUARD_SECRET` nor `--random` was given.
    #[error("no secret provided (use --secret, SECRETGUARD_SECRET or --random)")]
    MissingSecret,

    /// Reading guesses or writing prompts failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
