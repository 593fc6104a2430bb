//! Command dispatcher: routes a token list to a registered handler by alias,
//! coerces the remaining tokens into the handler's declared parameter types,
//! and calls it.
//!
//! ```
//! use commando::Dispatcher;
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.register("add", "adds 2 numbers", |a: isize, b: isize| {
//!     println!("{}", a + b);
//! });
//!
//! dispatcher.execute(&["add", "2", "4"]).unwrap();
//! assert!(dispatcher.execute(&["add", "2"]).is_err());
//! ```

pub mod coerce;
pub mod error;
pub mod handler;
pub mod param;
pub mod registry;


use std::any::Any;
use std::sync::{Arc, Weak};

use tracing::debug;

pub use coerce::{
    BaseStrategy, CoercionEngine, CoercionFailure, CoercionStrategy, FloatStrategy,
    SignedStrategy, UnsignedStrategy,
};
pub use error::{DispatchError, Result};
pub use handler::{Handler, IntoHandler};
pub use param::{Param, ParamType, Value};
pub use registry::{Command, Registry};

pub const HELP_NAMES: &str = "help h --help";
pub const HELP_DESCRIPTION: &str = "Displays usages";

pub struct Dispatcher {
    registry: Arc<Registry>,
    engine: CoercionEngine,
}

impl Dispatcher {
    /// A dispatcher with the built-in help command already registered.
    ///
    /// Help writes the plain-text `usage()` listing to stdout. Callers that
    /// format output differently start from [`Dispatcher::empty`] and register
    /// their own help under [`HELP_NAMES`].
    pub fn new() -> Self {
        let dispatcher = Self::empty();
        let registry: Weak<Registry> = Arc::downgrade(&dispatcher.registry);
        dispatcher.register(HELP_NAMES, HELP_DESCRIPTION, move || {
            if let Some(registry) = registry.upgrade() {
                print!("{}", registry.usage());
            }
        });
        dispatcher
    }

    /// A dispatcher with no commands at all.
    pub fn empty() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            engine: CoercionEngine::new(),
        }
    }

    /// Replace the coercion chain, e.g. to append a strategy for a custom type.
    pub fn with_engine(mut self, engine: CoercionEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn register<F, Marker>(&self, names: &str, description: &str, handler: F)
    where
        F: IntoHandler<Marker>,
    {
        self.registry.register(names, description, handler);
    }

    pub fn register_handler(&self, names: &str, description: &str, handler: Handler) {
        self.registry.register_handler(names, description, handler);
    }

    pub fn register_any(
        &self,
        names: &str,
        description: &str,
        handler: Box<dyn Any + Send + Sync>,
    ) {
        self.registry.register_any(names, description, handler);
    }

    pub fn usage(&self) -> String {
        self.registry.usage()
    }

    /// Usage line of the command `name` resolves to.
    pub fn usage_for(&self, name: &str) -> Option<String> {
        self.registry.find(name).map(|c| c.usage_line())
    }

    /// Run the command named by the first token with the rest as arguments.
    pub fn execute<S: AsRef<str>>(&self, tokens: &[S]) -> Result<()> {
        let Some((name, args)) = tokens.split_first() else {
            debug!("Dispatch called without tokens");
            return Err(DispatchError::EmptyInput);
        };
        let name = name.as_ref();

        // The registry lock is released here; handlers may read it again.
        let Some(command) = self.registry.find(name) else {
            debug!(command = name, "Unknown command");
            return Err(DispatchError::UnknownCommand {
                name: name.to_string(),
            });
        };

        debug!(command = name, argc = args.len(), "Dispatching command");
        self.invoke(name, &command, args)
    }

    fn invoke<S: AsRef<str>>(&self, name: &str, command: &Command, args: &[S]) -> Result<()> {
        let handler = command.handler();
        if args.len() != handler.arity() {
            debug!(
                command = name,
                expected = handler.arity(),
                actual = args.len(),
                "Argument count mismatch"
            );
            return Err(DispatchError::ArityMismatch {
                command: name.to_string(),
                expected: handler.arity(),
                actual: args.len(),
            });
        }

        let mut values = Vec::with_capacity(args.len());
        for (ty, raw) in handler.signature().iter().zip(args) {
            let raw = raw.as_ref();
            match self.engine.coerce(*ty, raw) {
                Some(Ok(value)) => values.push(value),
                Some(Err(failure)) => {
                    debug!(command = name, %failure, "Argument coercion failed");
                    return Err(DispatchError::TypeMismatch {
                        command: name.to_string(),
                        expected: ty.name().to_string(),
                        value: raw.to_string(),
                    });
                }
                None => panic!("{} arguments are not supported", ty.name()),
            }
        }

        handler.invoke(values);
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
