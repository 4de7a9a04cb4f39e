//! Collecting a role into a [`RoleDoc`] and rendering it.

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use super::engine::{RenderContext, render_string};
use super::markdown::{PlatformRow, dependency_list, table_section};
use super::template::DEFAULT_TEMPLATE;
use crate::errors::{RoleDocError, read_to_string};
use crate::role::{
    LayoutError, MetaError, MetaInfo, RoleInfo, RoleLayout, check_role_structure, load_meta,
};
use crate::tables::{
    DefaultVarRow, MandatoryVarRow, default_vars_table, mandatory_vars_table,
};
use crate::{tasks, vars};

/// Host group used by the generated example playbook.
pub const EXAMPLE_HOSTS: &str = "servers";

const PLATFORMS_INTRO: &str = "This role has been tested on the following platforms.";
const MANDATORY_INTRO: &str =
    "The following table lists the mandatory variables for this role, along with a description.";
const DEFAULTS_INTRO: &str = "The following table lists the configurable variables for this role, \
along with their default values and a description.";

#[derive(Debug, Error)]
pub enum ReadmeError {
    #[error("invalid role structure: {0}")]
    Layout(#[from] LayoutError),

    #[error("invalid role metadata: {0}")]
    Meta(#[from] MetaError),

    #[error(transparent)]
    Role(#[from] RoleDocError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything the README is rendered from.
#[derive(Debug, Clone)]
pub struct RoleDoc {
    pub info: RoleInfo,
    pub platforms: Vec<PlatformRow>,
    pub dependencies: Vec<Value>,
    pub default_vars_table: Vec<DefaultVarRow>,
    pub mandatory_vars_table: Vec<MandatoryVarRow>,
    /// Content of `example.yml`, when the role ships one.
    pub example_content: Option<String>,
}

impl RoleDoc {
    /// Validate the role at `root` and collect its documentation data.
    pub fn load(root: &Path) -> Result<Self, ReadmeError> {
        let layout = check_role_structure(root)?;
        let meta = load_meta(&layout.meta_file)?;
        Self::collect(&layout, &meta)
    }

    /// Run the variable extraction pipeline over a checked layout.
    ///
    /// Defaults become the default table. Names asserted as defined in
    /// `tasks/` are sorted and reconciled against `vars/main.yml`.
    pub fn collect(layout: &RoleLayout, meta: &MetaInfo) -> Result<Self, ReadmeError> {
        let info = meta.validate()?;

        let defaults = vars::parse_file(&layout.defaults_file)?;
        let default_vars_table = default_vars_table(&defaults);

        let mandatory = tasks::scan_tree(&layout.tasks_dir)?;
        let documented = vars::parse_file(&layout.vars_file)?;
        let mandatory_vars_table = mandatory_vars_table(&mandatory, &documented);

        let example_content = read_example(&layout.example_file)?;

        info!(
            role = %info.role_name,
            defaults = default_vars_table.len(),
            mandatory = mandatory_vars_table.len(),
            "collected role variables"
        );

        Ok(Self {
            info,
            platforms: meta.platforms().iter().map(PlatformRow::from).collect(),
            dependencies: meta.dependencies().to_vec(),
            default_vars_table,
            mandatory_vars_table,
            example_content,
        })
    }
}

fn read_example(path: &Path) -> Result<Option<String>, RoleDocError> {
    if !path.is_file() {
        debug!(path = %path.display(), "no example playbook");
        return Ok(None);
    }
    read_to_string(path).map(Some)
}

/// Load a custom template, or fall back to the built-in one.
pub fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>, RoleDocError> {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "using custom template");
            read_to_string(p).map(Cow::Owned)
        }
        None => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
    }
}

/// Build the placeholder values for the README template.
pub fn build_render_context(doc: &RoleDoc, clone_url: Option<&str>) -> RenderContext {
    let mut ctx = RenderContext::new();
    let role_name = &doc.info.role_name;

    ctx.insert("role_name".into(), role_name.clone());
    ctx.insert("description".into(), doc.info.description.clone());
    ctx.insert("author".into(), doc.info.author.clone());

    ctx.insert("platforms_section".into(), table_section(PLATFORMS_INTRO, &doc.platforms));
    ctx.insert("dependencies_section".into(), dependency_list(&doc.dependencies));
    ctx.insert(
        "mandatory_vars_section".into(),
        table_section(MANDATORY_INTRO, &doc.mandatory_vars_table),
    );
    ctx.insert(
        "default_vars_section".into(),
        table_section(DEFAULTS_INTRO, &doc.default_vars_table),
    );

    ctx.insert("requirements_snippet".into(), requirements_snippet(role_name, clone_url));
    ctx.insert("example_playbook".into(), example_playbook(doc));

    ctx
}

/// Render the README for `doc`.
#[must_use]
pub fn render(doc: &RoleDoc, template: &str, clone_url: Option<&str>) -> String {
    let ctx = build_render_context(doc, clone_url);
    render_string(template, &ctx)
}

fn requirements_snippet(role_name: &str, clone_url: Option<&str>) -> String {
    let src = clone_url.map_or_else(
        || format!("https://github.com/user/{role_name}.git"),
        str::to_string,
    );
    format!("- name: {role_name}\n  src: git+{src}\n  type: git")
}

fn example_playbook(doc: &RoleDoc) -> String {
    if let Some(content) = &doc.example_content {
        return content.trim_end().to_string();
    }

    let mut playbook = format!(
        "- hosts: {EXAMPLE_HOSTS}\n  roles:\n    - role: {}",
        doc.info.role_name
    );
    if !doc.mandatory_vars_table.is_empty() {
        playbook.push_str("\n      vars:");
        for row in &doc.mandatory_vars_table {
            playbook.push_str(&format!("\n        {0}: <{0}>", row.name));
        }
    }
    playbook
}

/// Write `content` to `path` without ever leaving a partial file behind.
///
/// The content goes to a temporary file next to the target, which is then
/// renamed over it.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), ReadmeError> {
    let write_err =
        |source: std::io::Error| ReadmeError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote README");
    Ok(())
}
