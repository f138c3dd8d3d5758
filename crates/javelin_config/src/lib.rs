//! Compiler options for Java problem reporting and their `javelin.toml` loader.
//!
//! [`CompilerOptions`] is the immutable per-session policy the reporter reads:
//! one [`Level`](javelin_problem::Level) per irritant plus the doc-comment,
//! compliance, and error-handling toggles. It is usually built with
//! [`load_config`], which also yields the [`LoggingConfig`] for the host.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod logging;
pub mod options;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, JavelinConfig, CONFIG_FILE_NAME};
pub use logging::{init_tracing, LoggingConfig};
pub use options::{CompilerOptions, JavaVersion, MissingTagDescription};
