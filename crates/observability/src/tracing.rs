//! Utility functions for tracing

/// Create a span for one dispatched command
///
/// # Example
///
/// ```rust
/// use commando_observability::command_span;
///
/// let span = command_span!("add", 2);
/// let _guard = span.enter();
/// // ... dispatch ...
/// ```
#[macro_export]
macro_rules! command_span {
    ($command:expr, $argc:expr) => {
        tracing::info_span!(
            "command.dispatch",
            command.name = $command,
            command.argc = $argc,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span
///
/// # Example
///
/// ```rust
/// use commando_observability::record_error;
///
/// let err = std::io::Error::other("boom");
/// record_error(&err);
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::debug!(error = %error, "Command failed");
}
