use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. Without one, the default
    /// location is tried and built-in defaults are used when it is absent.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = default_config_path();
                if !default.exists() {
                    debug!(path = %default.display(), "no config file, using defaults");
                    return Ok(ResolvedConfig::default());
                }
                default
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Self::resolve(&path, &cf)
    }

    fn resolve(source: &Path, cf: &ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let output_path = cf.output.path.as_deref().map(expand_path).transpose()?;

        let template = cf.output.template.as_deref().map(expand_path).transpose()?;

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            source: Some(source.to_path_buf()),
            output_path,
            clone_url: cf.output.clone_url.clone(),
            template,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("roledoc").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("roledoc").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
