//! Commando Observability - logging setup shared by the commando binaries
//!
//! # Quick Start
//!
//! ```no_run
//! use commando_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("my-tool").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), commando_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `COMMANDO_SERVICE_NAME` - Service name
//! - `COMMANDO_LOG` or `RUST_LOG` - Log level filter
//! - `NO_COLOR` - Disable colored log output

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{env_filter, init};
pub use crate::tracing::record_error;
