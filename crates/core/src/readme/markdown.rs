//! Markdown building blocks for the README sections.

use serde_yaml::Value;
use tabled::settings::object::Rows;
use tabled::settings::{Format, Style};
use tabled::{Table, Tabled};

use crate::role::Platform;
use crate::tables::display_value;

/// Placeholder text for an empty section.
pub const NONE: &str = "None";

/// Row of the tested platforms table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct PlatformRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Versions")]
    pub versions: String,
    #[tabled(rename = "Comments")]
    pub comments: String,
}

impl From<&Platform> for PlatformRow {
    fn from(platform: &Platform) -> Self {
        let versions: Vec<String> = platform.versions.iter().map(display_value).collect();
        Self {
            name: platform.name.clone(),
            versions: versions.join(", "),
            comments: String::new(),
        }
    }
}

/// Render rows as a Markdown pipe table.
pub fn markdown_table<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::markdown()).modify(Rows::new(1..), Format::content(escape_cell));
    table.to_string()
}

/// Cell text that cannot break the table layout.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', "<br>")
}

/// Table preceded by an intro sentence, or [`NONE`] when there are no rows.
pub fn table_section<T: Tabled>(intro: &str, rows: &[T]) -> String {
    if rows.is_empty() {
        return NONE.to_string();
    }
    format!("{intro}\n\n{}", markdown_table(rows))
}

/// Bullet list of role dependencies, or [`NONE`].
pub fn dependency_list(dependencies: &[Value]) -> String {
    if dependencies.is_empty() {
        return NONE.to_string();
    }
    dependencies
        .iter()
        .map(|dep| format!("- {}", dependency_name(dep)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Name of a dependency given either as a string or as a `role:`/`name:` mapping.
fn dependency_name(dep: &Value) -> String {
    ["role", "name", "src"]
        .iter()
        .find_map(|key| dep.get(*key).and_then(Value::as_str))
        .map_or_else(|| display_value(dep), str::to_string)
}
