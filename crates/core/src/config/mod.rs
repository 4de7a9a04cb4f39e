//! Optional user configuration (`~/.config/roledoc/config.toml`).

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, DEFAULT_OUTPUT, LoggingConfig, OutputConfig, ResolvedConfig};
