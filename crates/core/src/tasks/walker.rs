//! Recursive task directory walker.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::RoleDocError;

/// Walker for discovering YAML task files below a directory.
#[derive(Debug)]
pub struct TaskWalker {
    root: PathBuf,
}

impl TaskWalker {
    /// Create a new walker for the given tasks directory.
    pub fn new(root: &Path) -> Result<Self, RoleDocError> {
        if !root.is_dir() {
            return Err(RoleDocError::MissingFile { path: root.to_path_buf() });
        }
        Ok(Self { root: root.to_path_buf() })
    }

    /// Walk the directory and return every `.yml` / `.yaml` file, sorted by path.
    pub fn walk(&self) -> Result<Vec<PathBuf>, RoleDocError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry
                .map_err(|e| RoleDocError::Walk { path: self.root.clone(), source: e })?;

            let path = entry.path();
            if path.is_file() && is_yaml_file(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "yml" || e == "yaml")
}
