//! SecretGuard terminal host.
//!
//! # Usage
//!
//! ```bash
//! # Explicit secret
//! secretguard --secret "abc def ghi"
//!
//! # Secret from the environment
//! SECRETGUARD_SECRET=hunter2 secretguard
//!
//! # Random secret, shown after the session ends
//! secretguard --random --reveal
//! ```
//!
//! Guesses are read from stdin, one per line. Logs go to stderr.

mod error;
mod game;

use std::io::{self, Write};
use std::process::ExitCode;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use clap::Parser;
use rand::RngCore;
use secretguard_core::Guard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zeroize::Zeroizing;

use crate::error::CliError;
use crate::game::{play, GameResult};

/// Default size of a generated secret, before encoding.
const DEFAULT_RANDOM_BYTES: &str = "18";

/// Environment variable holding the secret.
const SECRET_ENV: &str = "SECRETGUARD_SECRET";

/// Bounded-attempt secret guessing game
#[derive(Parser)]
#[command(name = "secretguard")]
#[command(about = "Guess the secret before three wrong attempts lock it")]
#[command(version)]
struct Args {
    /// Secret to guess
    #[arg(long, env = SECRET_ENV, hide_env_values = true)]
    secret: Option<String>,

    /// Generate a random URL-safe secret from BYTES random bytes instead
    #[arg(
        long,
        value_name = "BYTES",
        num_args = 0..=1,
        default_missing_value = DEFAULT_RANDOM_BYTES
    )]
    random: Option<usize>,

    /// Print the secret once the session ends
    #[arg(long)]
    reveal: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let mut args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let result = run(&mut args);
    if let Err(ref e) = result {
        tracing::error!("{}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when the secret was guessed, 1 on lockout or closed input, 2 on error.
fn exit_status(result: &Result<GameResult, CliError>) -> u8 {
    match result {
        Ok(GameResult::Won { .. }) => 0,
        Ok(GameResult::Locked | GameResult::InputClosed) => 1,
        Err(_) => 2,
    }
}

fn run(args: &mut Args) -> Result<GameResult, CliError> {
    let secret = resolve_secret(args)?;
    let mut guard = Guard::new(secret.as_bytes());
    tracing::info!(random = args.random.is_some(), "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = play(&mut guard, stdin.lock(), &mut stdout)?;
    tracing::info!(?result, remaining = guard.remaining(), "session ended");

    if args.reveal {
        writeln!(stdout, "Secret was: {}", secret.as_str())?;
    }

    Ok(result)
}

/// Pick the secret source: `--random` first, else `--secret` or the environment.
///
/// The secret string is moved out of `args` so only the zeroizing copy remains.
fn resolve_secret(args: &mut Args) -> Result<Zeroizing<String>, CliError> {
    if let Some(len) = args.random {
        if let Some(ignored) = args.secret.take() {
            drop(Zeroizing::new(ignored));
        }
        return Ok(random_secret(len));
    }

    args.secret
        .take()
        .map(Zeroizing::new)
        .ok_or(CliError::MissingSecret)
}

/// Draw `len` random bytes and encode them as URL-safe base64 without padding.
fn random_secret(len: usize) -> Zeroizing<String> {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    rand::thread_rng().fill_bytes(&mut bytes);
    Zeroizing::new(URL_SAFE_NO_PAD.encode(bytes.as_slice()))
}
