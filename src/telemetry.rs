//! Tracing subscriber setup.
//!
//! The subscriber is process-global, so installation happens at most once.
//! Components log through `tracing` macros and never hold a logger object.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Returns `true` if this
/// call installed the subscriber, `false` if one was already in place
/// (from an earlier call or from another library).
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed_now = false;

    INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let result = match config.format {
            LogFormat::Pretty => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .compact()
                .try_init(),
            LogFormat::Json => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .try_init(),
        };
        installed_now = result.is_ok();
    });

    installed_now
}
