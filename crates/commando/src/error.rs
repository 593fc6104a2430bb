use thiserror::Error;

/// Runtime dispatch failures, returned by `Dispatcher::execute`.
///
/// Wiring defects (a non-handler passed to registration, a parameter type with
/// no coercion strategy) are not represented here: they panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("not enough arguments")]
    EmptyInput,

    #[error("\"{name}\" is not a recognized command")]
    UnknownCommand { name: String },

    #[error(
        "\"{command}\" expects {expected} {noun} but got {actual}",
        noun = argument_noun(.expected)
    )]
    ArityMismatch {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[error("\"{command}\" expects {expected} but got {value}")]
    TypeMismatch {
        command: String,
        expected: String,
        value: String,
    },
}

impl DispatchError {
    /// Name the caller typed, when the error is tied to one.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::EmptyInput => None,
            Self::UnknownCommand { name } => Some(name),
            Self::ArityMismatch { command, .. } | Self::TypeMismatch { command, .. } => {
                Some(command)
            }
        }
    }
}

fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
