//! Rendering-ready variable rows.

use serde::Serialize;
use serde_yaml::Value;
use tabled::Tabled;

use crate::vars::{CommentedVars, VariableRecord};

/// Row of the default variables table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultVarRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    pub var_type: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Comments")]
    pub comments: String,
}

/// Row of the mandatory variables table. Mandatory variables are supplied
/// by the caller, so there is no value column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
#[serde(rename_all = "PascalCase")]
pub struct MandatoryVarRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    pub var_type: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Comments")]
    pub comments: String,
}

impl MandatoryVarRow {
    /// Row for a mandatory variable nobody documented.
    pub fn undocumented(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_type: String::new(),
            description: String::new(),
            comments: String::new(),
        }
    }
}

impl From<&VariableRecord> for DefaultVarRow {
    fn from(record: &VariableRecord) -> Self {
        Self {
            name: record.name.clone(),
            var_type: record.inferred_type.to_string(),
            description: record.description.clone(),
            value: display_value(&record.value),
            comments: record.comments.clone(),
        }
    }
}

impl From<&VariableRecord> for MandatoryVarRow {
    fn from(record: &VariableRecord) -> Self {
        Self {
            name: record.name.clone(),
            var_type: record.inferred_type.to_string(),
            description: record.description.clone(),
            comments: record.comments.clone(),
        }
    }
}

/// One row per declared default, in declaration order.
pub fn default_vars_table(defaults: &CommentedVars) -> Vec<DefaultVarRow> {
    defaults.iter().map(DefaultVarRow::from).collect()
}

/// One row per mandatory name, in the given order.
///
/// Names documented in `vars` take their type and description from there.
/// Undocumented names are still listed, with blank columns.
pub fn mandatory_vars_table<I, S>(names: I, vars: &CommentedVars) -> Vec<MandatoryVarRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            vars.get(name)
                .map_or_else(|| MandatoryVarRow::undocumented(name), MandatoryVarRow::from)
        })
        .collect()
}

/// Literal form of a value for the tables.
///
/// Strings are shown as-is, null as an empty cell, collections in compact
/// flow style.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(flow_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(_) | Value::Tagged(_) => flow_value(value),
    }
}

fn flow_value(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::String(s) if needs_quotes(s) => format!("{s:?}"),
        Value::Sequence(_) => display_value(value),
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", flow_value(k), flow_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, flow_value(&tagged.value)),
        _ => display_value(value),
    }
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty() || s.contains([',', ':', '[', ']', '{', '}', '#', '"']) || s.trim() != s
}
