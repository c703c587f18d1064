//! Logging utilities module
//!
//! Installs the global tracing subscriber for binaries embedding this library.
//! The validator itself only emits `debug!` events on rejection paths.

use crate::error::AppError;

/// Initialize logging with the specified default level.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init(level: &str) -> crate::Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
