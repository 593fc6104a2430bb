//! Subscriber initialization.
//!
//! Logs go to stderr so stdout stays reserved for command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Build the filter for `config`.
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(config.filter_directive())
        .map_err(|e| ObservabilityError::Config(format!("{}: {}", config.filter_directive(), e)))
}

/// Install the global subscriber described by `config`.
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = env_filter(&config)?;

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(config.ansi)
            .with_target(false)
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        filter = config.filter_directive(),
        "Logging initialized"
    );

    Ok(())
}
