// Copyright 2025 the Curtain Authors
// SPDX-License-Identifier: Apache-2.0

//! Console logging for hosts that don't configure [`tracing`] themselves.
//!
//! A curtain only emits events: `debug` when a setting is rejected, `trace` for
//! gestures, animation steps and the `CurtainView` span around each host call.
//! Hosts with their own subscriber need nothing from this module.
//!
//! [`curtain_subscriber`] builds a console subscriber. Each line carries a UTC
//! wall-clock time with millisecond precision and no target. `RUST_LOG` directives
//! take precedence over the level passed in, so `RUST_LOG=curtain=trace` shows
//! every drag step. [`install_logging`] makes that subscriber the global default.

use std::error::Error;
use std::fmt;

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;

/// Builds the console subscriber, showing events at `level` and above unless
/// `RUST_LOG` says otherwise.
///
/// Invalid `RUST_LOG` directives are skipped rather than reported.
pub fn curtain_subscriber(level: LevelFilter) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let clock = UtcTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]Z"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(clock)
        .with_target(false)
        .finish()
}

/// Installs [`curtain_subscriber`] as the global default.
///
/// Fails, leaving the existing subscriber in place, when the process already has one.
pub fn install_logging(level: LevelFilter) -> Result<(), LoggingAlreadyInstalled> {
    // Checked up front so `RUST_LOG` isn't parsed for a subscriber that would be thrown away.
    if tracing_core::dispatcher::has_been_set() {
        return Err(LoggingAlreadyInstalled);
    }
    tracing::subscriber::set_global_default(curtain_subscriber(level))
        .map_err(|_| LoggingAlreadyInstalled)
}

/// Returned by [`install_logging`] when a global subscriber is already active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggingAlreadyInstalled;

impl fmt::Display for LoggingAlreadyInstalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("curtain logging not installed: a global tracing subscriber is already active")
    }
}

impl Error for LoggingAlreadyInstalled {}

// --- MARK: TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        // Another test may have installed first; either way the next attempt fails.
        let _ = install_logging(LevelFilter::WARN);
        assert_eq!(
            install_logging(LevelFilter::WARN),
            Err(LoggingAlreadyInstalled)
        );
    }

    #[test]
    fn refusal_explains_itself() {
        let message = LoggingAlreadyInstalled.to_string();
        assert!(message.contains("already active"), "unexpected message: {message}");
    }
}
