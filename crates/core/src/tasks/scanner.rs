//! Mandatory variable discovery from `assert` tasks.
//!
//! A variable is mandatory when a task asserts `<name> is defined`:
//!
//! ```yaml
//! - ansible.builtin.assert:
//!     that:
//!       - hostname is defined
//! - block:
//!     - assert:
//!         that: ["region is defined"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use tracing::{debug, trace};

use super::walker::TaskWalker;
use crate::errors::{RoleDocError, read_to_string};

/// Both spellings of the assertion module.
pub const ASSERT_DIRECTIVES: [&str; 2] = ["ansible.builtin.assert", "assert"];

/// Directive that groups nested tasks.
pub const BLOCK_DIRECTIVE: &str = "block";

/// How many `block` levels are expanded. Assertions in blocks nested deeper
/// than this are not reported.
pub const MAX_GROUPING_DEPTH: usize = 1;

static IS_DEFINED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+is\s+defined").expect("valid regex"));

/// Mandatory variable names, sorted and deduplicated.
pub type MandatoryVars = BTreeSet<String>;

/// Scan one task file.
pub fn scan_file(path: &Path) -> Result<MandatoryVars, RoleDocError> {
    let content = read_to_string(path)?;
    let names = scan_str(path, &content)?;
    debug!(path = %path.display(), found = names.len(), "scanned task file");
    Ok(names)
}

/// Scan every YAML file under `folder`, recursively.
///
/// The result is the union of the per-file sets. The first file that fails
/// to parse aborts the whole scan.
pub fn scan_tree(folder: &Path) -> Result<MandatoryVars, RoleDocError> {
    let files = TaskWalker::new(folder)?.walk()?;
    files.iter().try_fold(MandatoryVars::new(), |mut acc, file| {
        acc.extend(scan_file(file)?);
        Ok(acc)
    })
}

/// Scan task file content. `source` is only used in error messages.
pub fn scan_str(source: &Path, content: &str) -> Result<MandatoryVars, RoleDocError> {
    let document: Value =
        serde_yaml::from_str(content).map_err(|e| RoleDocError::parse(source, e))?;

    let mut names = MandatoryVars::new();
    if document.is_null() {
        return Ok(names);
    }

    for task in task_list(source, &document)? {
        scan_task(source, task_record(source, task)?, 0, &mut names)?;
    }
    Ok(names)
}

fn scan_task(
    source: &Path,
    task: &Mapping,
    depth: usize,
    names: &mut MandatoryVars,
) -> Result<(), RoleDocError> {
    if depth < MAX_GROUPING_DEPTH
        && let Some(block) = task.get(BLOCK_DIRECTIVE)
    {
        for nested in task_list(source, block)? {
            scan_task(source, task_record(source, nested)?, depth + 1, names)?;
        }
        return Ok(());
    }

    if let Some(args) = ASSERT_DIRECTIVES.iter().find_map(|d| task.get(*d)) {
        collect_defined(args, names);
    }
    Ok(())
}

/// Add every `<name> is defined` condition found in an assert's `that` list.
fn collect_defined(args: &Value, names: &mut MandatoryVars) {
    let conditions: Vec<&Value> = match args.get("that") {
        Some(Value::Sequence(items)) => items.iter().collect(),
        Some(single @ Value::String(_)) => vec![single],
        _ => return,
    };

    for condition in conditions.into_iter().filter_map(Value::as_str) {
        if let Some(caps) = IS_DEFINED_RE.captures(condition) {
            trace!(condition, name = &caps[1], "mandatory variable");
            names.insert(caps[1].to_string());
        }
    }
}

fn task_list<'a>(source: &Path, value: &'a Value) -> Result<&'a [Value], RoleDocError> {
    value.as_sequence().map(Vec::as_slice).ok_or_else(|| {
        RoleDocError::schema(source, "expected a sequence of task records")
    })
}

fn task_record<'a>(source: &Path, value: &'a Value) -> Result<&'a Mapping, RoleDocError> {
    value
        .as_mapping()
        .ok_or_else(|| RoleDocError::schema(source, "task record is not a mapping"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan(content: &str) -> Vec<String> {
        scan_str(Path::new("tasks/main.yml"), content).unwrap().into_iter().collect()
    }

    #[test]
    fn finds_top_level_and_block_assertions() {
        let content = r#"
- assert:
    that:
      - "hostname is defined"
- block:
    - assert:
        that: ["region is defined"]
"#;
        assert_eq!(scan(content), ["hostname", "region"]);
    }

    #[test]
    fn accepts_namespaced_directive() {
        let content = r#"
- name: Check inputs
  ansible.builtin.assert:
    that:
      - db_password is defined
      - db_port | int > 0
"#;
        assert_eq!(scan(content), ["db_password"]);
    }

    #[test]
    fn nested_block_beyond_depth_is_ignored() {
        let content = r#"
- block:
    - block:
        - assert:
            that: ["deep_var is defined"]
    - assert:
        that: ["shallow_var is defined"]
"#;
        assert_eq!(scan(content), ["shallow_var"]);
    }

    #[test]
    fn match_is_case_sensitive_and_requires_defined() {
        let content = r#"
- assert:
    that:
      - "Name is defined"
      - "name is undefined"
      - "other is not defined"
      - "x IS DEFINED"
"#;
        assert_eq!(scan(content), ["Name"]);
    }

    #[test]
    fn single_string_condition_is_accepted() {
        let content = "- assert:\n    that: token is defined\n";
        assert_eq!(scan(content), ["token"]);
    }

    #[test]
    fn tasks_without_assertions_contribute_nothing() {
        let content = r#"
- name: Install package
  ansible.builtin.package:
    name: nginx
- debug:
    msg: "{{ foo is defined }}"
"#;
        assert!(scan(content).is_empty());
    }

    #[test]
    fn empty_file_has_no_tasks() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = scan_str(Path::new("tasks/bad.yml"), "- assert: [unclosed\n").unwrap_err();
        assert!(matches!(err, RoleDocError::Parse { .. }));
    }

    #[test]
    fn non_mapping_record_is_schema_error() {
        let err = scan_str(Path::new("tasks/bad.yml"), "- just a string\n").unwrap_err();
        assert!(matches!(err, RoleDocError::Schema { .. }));

        let err = scan_str(Path::new("tasks/bad.yml"), "key: value\n").unwrap_err();
        assert!(matches!(err, RoleDocError::Schema { .. }));
    }

    #[test]
    fn scan_tree_unions_all_yaml_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("main.yml"), "- assert:\n    that: ['a is defined']\n").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(
            root.join("sub/install.yaml"),
            "- assert:\n    that: ['b is defined', 'a is defined']\n",
        )
        .unwrap();
        fs::write(root.join("notes.txt"), "c is defined").unwrap();

        let names: Vec<_> = scan_tree(root).unwrap().into_iter().collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn scan_tree_fails_on_any_malformed_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("good.yml"), "- assert:\n    that: ['a is defined']\n").unwrap();
        fs::write(root.join("bad.yml"), "- assert: [unclosed\n").unwrap();

        let err = scan_tree(root).unwrap_err();
        assert!(err.path().ends_with("bad.yml"));
    }

    #[test]
    fn scan_tree_missing_folder() {
        let err = scan_tree(Path::new("/nonexistent/role/tasks")).unwrap_err();
        assert!(matches!(err, RoleDocError::MissingFile { .. }));
    }
}
