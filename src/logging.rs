//! Tracing subscriber installation for hosts that do not bring their own.
//!
//! The layout crates only emit `tracing` events: pass summaries at `debug`,
//! per-item placement at `trace`, degenerate geometry at `warn` and a missing
//! host at `error`. Applications that already install a subscriber can ignore
//! this module.

use std::str::FromStr;
use std::sync::{Mutex, Once, OnceLock};

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();
static LOG_LEVEL: OnceLock<Mutex<LevelFilter>> = OnceLock::new();

fn log_level() -> LevelFilter {
    LOG_LEVEL
        .get()
        .and_then(|slot| slot.lock().ok().map(|level| *level))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Sets the level used when `RUST_LOG` is not set.
///
/// Unknown levels fall back to `info`. Has no effect once
/// [`install_tracing`] has run.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL);
    let slot = LOG_LEVEL.get_or_init(|| Mutex::new(DEFAULT_LOG_LEVEL));
    if let Ok(mut guard) = slot.lock() {
        *guard = parsed;
    }
}

/// Installs a global `fmt` subscriber filtered by `RUST_LOG` (idempotent).
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(log_level().into())
            .from_env_lossy();

        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();

        if let Err(error) = result {
            tracing::debug!(%error, "a tracing subscriber is already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_is_idempotent() {
        set_log_level("debug");
        install_tracing();
        install_tracing();

        assert!(TRACING_INSTALLED.is_completed());
        assert_eq!(log_level(), LevelFilter::DEBUG);
    }
}
