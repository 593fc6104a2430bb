//! Ordered, append-only command registry.

use std::any::Any;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::handler::{Handler, IntoHandler};

/// A registered command. Immutable once created.
#[derive(Debug)]
pub struct Command {
    names: Vec<String>,
    description: String,
    handler: Handler,
}

impl Command {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// `<alias>, <alias> [<type>, <type>]\t<description>`, without newline.
    pub fn usage_line(&self) -> String {
        let names = self.names.join(", ");
        let params: Vec<&str> = self.handler.signature().iter().map(|p| p.name()).collect();
        if params.is_empty() {
            format!("{}\t{}", names, self.description)
        } else {
            format!("{} [{}]\t{}", names, params.join(", "), self.description)
        }
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    commands: RwLock<Vec<Arc<Command>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native closure or function under whitespace-separated aliases.
    pub fn register<F, Marker>(&self, names: &str, description: &str, handler: F)
    where
        F: IntoHandler<Marker>,
    {
        self.register_handler(names, description, handler.into_handler());
    }

    /// Register a value whose type is only known at runtime.
    ///
    /// # Panics
    ///
    /// Panics when `handler` is not a [`Handler`].
    pub fn register_any(
        &self,
        names: &str,
        description: &str,
        handler: Box<dyn Any + Send + Sync>,
    ) {
        match handler.downcast::<Handler>() {
            Ok(handler) => self.register_handler(names, description, *handler),
            Err(_) => panic!(
                "invalid handler registration for \"{}\": didn't pass a handler",
                names
            ),
        }
    }

    /// # Panics
    ///
    /// Panics when `names` holds no alias.
    pub fn register_handler(&self, names: &str, description: &str, handler: Handler) {
        let names: Vec<String> = names.split_whitespace().map(str::to_string).collect();
        if names.is_empty() {
            panic!("invalid handler registration: a command needs at least one name");
        }

        debug!(
            aliases = ?names,
            arity = handler.arity(),
            "Registering command"
        );

        let command = Arc::new(Command {
            names,
            description: description.to_string(),
            handler,
        });
        self.commands
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command);
    }

    /// First command, in registration order, answering to `name`.
    pub fn find(&self, name: &str) -> Option<Arc<Command>> {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| c.matches(name))
            .cloned()
    }

    /// Snapshot of the registered commands, in registration order.
    pub fn commands(&self) -> Vec<Arc<Command>> {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.commands
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn usage(&self) -> String {
        let mut usage = String::from("Usage:\n");
        for command in self.commands() {
            usage.push_str(&command.usage_line());
            usage.push('\n');
        }
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::ParamType;

    #[test]
    fn test_register_splits_aliases() {
        let registry = Registry::new();
        registry.register("list  ls\tl", "lists things", || {});

        let command = registry.find("ls").unwrap();
        assert_eq!(command.names(), &["list", "ls", "l"]);
        assert_eq!(command.description(), "lists things");
    }

    #[test]
    fn test_registry_only_grows() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        registry.register("a", "", || {});
        registry.register("a", "", |_: u8| {});
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_find_is_first_match_wins() {
        let registry = Registry::new();
        registry.register("go run", "first", || {});
        registry.register("run", "second", |_: String| {});

        assert_eq!(registry.find("run").unwrap().description(), "first");
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn test_usage_line_without_params() {
        let registry = Registry::new();
        registry.register("version v", "Prints the version", || {});
        assert_eq!(
            registry.find("v").unwrap().usage_line(),
            "version, v\tPrints the version"
        );
    }

    #[test]
    fn test_usage_line_with_params() {
        let registry = Registry::new();
        registry.register_handler(
            "move",
            "moves",
            Handler::new(vec![ParamType::Float32, ParamType::Custom("Point")], |_| {}),
        );
        assert_eq!(
            registry.find("move").unwrap().usage_line(),
            "move [float32, Point]\tmoves"
        );
    }

    #[test]
    fn test_register_any_accepts_handler() {
        let registry = Registry::new();
        registry.register_any("noop", "", Box::new(Handler::from_fn(|| {})));
        assert!(registry.find("noop").is_some());
    }

    #[test]
    #[should_panic(expected = "didn't pass a handler")]
    fn test_register_any_panics_on_non_handler() {
        let registry = Registry::new();
        registry.register_any("add", "adds 2 numbers", Box::new(1));
    }

    #[test]
    #[should_panic(expected = "at least one name")]
    fn test_register_panics_without_names() {
        let registry = Registry::new();
        registry.register("   ", "nameless", || {});
    }
}
