//! Configuration for logging

use serde::{Deserialize, Serialize};

fn default_service_name() -> String {
    "commando".to_string()
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup event (e.g., "commando")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log level filter (e.g., "info", "debug", "commando=trace")
    /// Defaults to "warn" if not set
    #[serde(default)]
    pub log_level: Option<String>,

    /// Enable the stderr formatter
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Colored output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: None,
            enable_console: true,
            ansi: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `COMMANDO_SERVICE_NAME` → service_name
    /// - `COMMANDO_LOG` or `RUST_LOG` → log_level
    /// - `NO_COLOR` (any value) → disables ansi
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("COMMANDO_SERVICE_NAME").unwrap_or_else(|_| default_service_name());

        let log_level = std::env::var("COMMANDO_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|level| !level.trim().is_empty());

        let ansi = std::env::var_os("NO_COLOR").is_none();

        Self {
            service_name,
            log_level,
            enable_console: true,
            ansi,
        }
    }

    /// Filter directive the subscriber will use.
    pub fn filter_directive(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.service_name, "commando");
        assert_eq!(config.filter_directive(), "warn");
        assert!(config.enable_console);
        assert!(config.ansi);
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new("demo")
            .with_log_level("debug")
            .with_console(false)
            .with_ansi(false);
        assert_eq!(config.service_name, "demo");
        assert_eq!(config.filter_directive(), "debug");
        assert!(!config.enable_console);
        assert!(!config.ansi);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ObservabilityConfig =
            serde_json::from_str(r#"{"log_level": "commando=trace"}"#).unwrap();
        assert_eq!(config.service_name, "commando");
        assert_eq!(config.log_level.as_deref(), Some("commando=trace"));
        assert!(config.enable_console);
    }
}
