//! Role directory layout checks.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directories every role must have, with the files required inside them.
pub const REQUIRED_LAYOUT: [(&str, &[&str]); 7] = [
    ("defaults", &["main.yml"]),
    ("files", &[]),
    ("handlers", &[]),
    ("meta", &["main.yml"]),
    ("tasks", &[]),
    ("templates", &[]),
    ("vars", &["main.yml"]),
];

/// Optional playbook shown verbatim in the usage section.
pub const EXAMPLE_FILE: &str = "example.yml";

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("role path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("the {dir} directory is missing in the role path: {}", root.display())]
    MissingDir { dir: String, root: PathBuf },

    #[error("the required file {file} is missing in the {dir} directory: {}", path.display())]
    MissingFile { file: String, dir: String, path: PathBuf },
}

/// Resolved paths of a role that passed the layout check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLayout {
    pub root: PathBuf,
    pub defaults_file: PathBuf,
    pub vars_file: PathBuf,
    pub meta_file: PathBuf,
    pub tasks_dir: PathBuf,
    /// `example.yml` at the role root. May not exist.
    pub example_file: PathBuf,
}

impl RoleLayout {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            defaults_file: root.join("defaults").join("main.yml"),
            vars_file: root.join("vars").join("main.yml"),
            meta_file: root.join("meta").join("main.yml"),
            tasks_dir: root.join("tasks"),
            example_file: root.join(EXAMPLE_FILE),
        }
    }
}

/// Check that `root` follows the standard role layout.
///
/// Directories are checked in [`REQUIRED_LAYOUT`] order and the first
/// problem found is returned.
pub fn check_role_structure(root: &Path) -> Result<RoleLayout, LayoutError> {
    if !root.is_dir() {
        return Err(LayoutError::MissingRoot(root.to_path_buf()));
    }

    for (dir, required_files) in REQUIRED_LAYOUT {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            return Err(LayoutError::MissingDir {
                dir: dir.to_string(),
                root: root.to_path_buf(),
            });
        }

        for file in required_files {
            let path = dir_path.join(file);
            if !path.is_file() {
                return Err(LayoutError::MissingFile {
                    file: (*file).to_string(),
                    dir: dir.to_string(),
                    path,
                });
            }
        }
    }

    Ok(RoleLayout::new(root))
}
