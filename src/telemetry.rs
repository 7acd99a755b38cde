//! Structured logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "amigo_fiel=info,tower_http=info";

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise
/// [`DEFAULT_FILTER`].
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
}
