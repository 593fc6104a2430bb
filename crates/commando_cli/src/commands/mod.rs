//! Command registration and dispatch.

pub mod math;
pub mod text;

use std::sync::Arc;

use commando::{DispatchError, Dispatcher, HELP_DESCRIPTION, HELP_NAMES};
use commando_observability::{command_span, record_error};
use serde_json::json;

use crate::output;

/// Dispatcher with the help command plus the demo commands.
pub fn dispatcher() -> Dispatcher {
    let dispatcher = Dispatcher::empty();
    register_help(&dispatcher);
    math::register(&dispatcher);
    text::register(&dispatcher);
    dispatcher
}

/// Same aliases and listing as the library's built-in help, printed through
/// `output` so `-o json` gets an envelope.
fn register_help(dispatcher: &Dispatcher) {
    let registry = Arc::downgrade(dispatcher.registry());
    dispatcher.register(HELP_NAMES, HELP_DESCRIPTION, move || {
        let Some(registry) = registry.upgrade() else {
            return;
        };
        let usage = registry.usage();
        let commands: Vec<_> = registry
            .commands()
            .iter()
            .map(|c| {
                let params: Vec<&str> =
                    c.handler().signature().iter().map(|p| p.name()).collect();
                json!({
                    "names": c.names(),
                    "params": params,
                    "description": c.description(),
                })
            })
            .collect();
        output::result(
            "help",
            usage.trim_end(),
            json!({ "usage": usage, "commands": commands }),
        );
    });
}

pub fn handle(dispatcher: &Dispatcher, tokens: &[String]) -> Result<(), DispatchError> {
    let name = tokens.first().map(String::as_str).unwrap_or_default();
    let span = command_span!(name, tokens.len().saturating_sub(1));
    let _guard = span.enter();

    dispatcher.execute(tokens).inspect_err(record_error)
}

/// Text to show after `err`: the command's own usage line when one matched,
/// the whole listing otherwise.
pub fn usage_hint(dispatcher: &Dispatcher, err: &DispatchError) -> String {
    match err {
        DispatchError::ArityMismatch { command, .. }
        | DispatchError::TypeMismatch { command, .. } => dispatcher
            .usage_for(command)
            .unwrap_or_else(|| dispatcher.usage()),
        DispatchError::EmptyInput | DispatchError::UnknownCommand { .. } => dispatcher.usage(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_commands_registered() {
        let dispatcher = dispatcher();
        for name in ["help", "add", "a", "echo", "say", "repeat", "scale", "flag"] {
            assert!(dispatcher.usage_for(name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_usage_listing() {
        let usage = dispatcher().usage();
        assert!(usage.starts_with("Usage:\nhelp, h, --help\tDisplays usages\n"));
        assert!(usage.contains("add, a [int, int]\tAdds two integers\n"));
        assert!(usage.contains("repeat [string, uint8]\t"));
    }

    #[test]
    fn test_hint_for_type_mismatch_is_one_line() {
        let dispatcher = dispatcher();
        let err = dispatcher.execute(&["a", "1", "x"]).unwrap_err();
        assert_eq!(
            usage_hint(&dispatcher, &err),
            "add, a [int, int]\tAdds two integers"
        );
    }

    #[test]
    fn test_hint_for_unknown_command_is_full_usage() {
        let dispatcher = dispatcher();
        let err = dispatcher.execute(&["deploy"]).unwrap_err();
        assert_eq!(usage_hint(&dispatcher, &err), dispatcher.usage());
    }

    #[test]
    fn test_handle_empty_tokens() {
        let dispatcher = dispatcher();
        let err = handle(&dispatcher, &[]).unwrap_err();
        assert_eq!(err, DispatchError::EmptyInput);
    }
}
