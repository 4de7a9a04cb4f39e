use std::path::PathBuf;

use serde::Deserialize;

/// Default file name of the generated document.
pub const DEFAULT_OUTPUT: &str = "README.md";

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the README is written.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct OutputConfig {
    /// Output file path (`~` is expanded).
    pub path: Option<String>,
    /// Git URL used in the requirements snippet.
    pub clone_url: Option<String>,
    /// Custom README template replacing the built-in one.
    pub template: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Config file the values came from, if any.
    pub source: Option<PathBuf>,
    /// Output path set in the config file. `None` means [`DEFAULT_OUTPUT`]
    /// in the working directory.
    pub output_path: Option<PathBuf>,
    pub clone_url: Option<String>,
    pub template: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            output_path: None,
            clone_url: None,
            template: None,
            logging: LoggingConfig::default(),
        }
    }
}
