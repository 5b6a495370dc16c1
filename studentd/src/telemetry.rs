//! Tracing initialization.
//!
//! Sets up `tracing-subscriber` with a console fmt layer and an
//! [`EnvFilter`] read from `RUST_LOG`, defaulting to `info`. Request spans
//! come from `tower-http`'s `TraceLayer`, installed in
//! [`crate::build_router`].

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber.
///
/// Safe to call once per process; a second call returns an error from
/// `try_init` which is propagated rather than panicking.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
