//! Galaxy metadata from `meta/main.yml`.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::errors::{RoleDocError, read_to_string};

/// Fields of `galaxy_info` that must be present and non-empty.
pub const REQUIRED_GALAXY_FIELDS: [&str; 3] = ["role_name", "author", "description"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    #[error("'galaxy_info' is missing in meta/main.yml")]
    MissingGalaxyInfo,

    #[error("'{0}' is missing in 'galaxy_info' in meta/main.yml")]
    MissingField(&'static str),

    #[error("'{0}' in 'galaxy_info' in meta/main.yml is empty")]
    EmptyField(&'static str),
}

/// Parsed `meta/main.yml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaInfo {
    #[serde(default)]
    pub galaxy_info: Option<GalaxyInfo>,
    #[serde(default)]
    dependencies: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalaxyInfo {
    pub role_name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    platforms: Option<Vec<Platform>>,
}

/// A platform the role was tested on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Platform {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<Value>,
}

/// Identity fields of a role whose metadata passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    pub role_name: String,
    pub author: String,
    pub description: String,
}

impl MetaInfo {
    /// Role dependencies, empty when the key is absent or null.
    pub fn dependencies(&self) -> &[Value] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    /// Platforms listed under `galaxy_info`.
    pub fn platforms(&self) -> &[Platform] {
        self.galaxy_info
            .as_ref()
            .and_then(|g| g.platforms.as_deref())
            .unwrap_or_default()
    }

    /// Check the fields the README needs.
    ///
    /// Fields are checked in [`REQUIRED_GALAXY_FIELDS`] order; the first
    /// missing or empty one is reported.
    pub fn validate(&self) -> Result<RoleInfo, MetaError> {
        let galaxy = self.galaxy_info.as_ref().ok_or(MetaError::MissingGalaxyInfo)?;

        let [role_name, author, description] = REQUIRED_GALAXY_FIELDS.map(|field| {
            let value = match field {
                "role_name" => &galaxy.role_name,
                "author" => &galaxy.author,
                _ => &galaxy.description,
            };
            match value.as_deref() {
                None => Err(MetaError::MissingField(field)),
                Some(v) if v.trim().is_empty() => Err(MetaError::EmptyField(field)),
                Some(v) => Ok(v.to_string()),
            }
        });

        Ok(RoleInfo { role_name: role_name?, author: author?, description: description? })
    }
}

/// Load `meta/main.yml`. An empty file yields default (empty) metadata.
pub fn load_meta(path: &Path) -> Result<MetaInfo, RoleDocError> {
    debug!(path = %path.display(), "loading role metadata");
    let content = read_to_string(path)?;
    let meta: Option<MetaInfo> =
        serde_yaml::from_str(&content).map_err(|e| RoleDocError::parse(path, e))?;
    Ok(meta.unwrap_or_default())
}
