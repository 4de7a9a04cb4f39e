//! Variable record types produced by the commented-value parser.

use serde::Serialize;
use serde_yaml::Value;
use std::fmt;

/// Primitive type inferred from a parsed YAML value.
///
/// The check order is string, boolean, integer, then the structural
/// fallback. Booleans must never be reported as integers. Unquoted YAML 1.1
/// words such as `yes` are already booleans by the time the parser calls
/// [`VarType::infer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum VarType {
    String,
    Boolean,
    Integer,
    /// Structural type name for everything else (`float`, `list`, `dict`, `null`, tag name).
    Other(String),
}

impl VarType {
    /// Infer the type of a parsed value.
    #[must_use]
    pub fn infer(value: &Value) -> Self {
        if value.is_string() {
            return Self::String;
        }
        if value.is_bool() {
            return Self::Boolean;
        }
        if value.is_i64() || value.is_u64() {
            return Self::Integer;
        }
        Self::Other(structural_name(value))
    }

    /// Name used in the rendered tables.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VarType> for String {
    fn from(t: VarType) -> Self {
        t.as_str().to_string()
    }
}

fn structural_name(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(_) => "boolean".into(),
        Value::Number(_) => "float".into(),
        Value::String(_) => "string".into(),
        Value::Sequence(_) => "list".into(),
        Value::Mapping(_) => "dict".into(),
        Value::Tagged(tagged) => tagged.tag.to_string().trim_start_matches('!').to_string(),
    }
}

/// One top-level variable declared in a defaults or vars file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableRecord {
    pub name: String,
    pub value: Value,
    pub inferred_type: VarType,
    /// Comment on the line directly above the declaration, if any.
    pub description: String,
    /// Reserved for per-variable annotations. Always empty for now.
    pub comments: String,
}

impl VariableRecord {
    pub fn new(name: impl Into<String>, value: Value, description: impl Into<String>) -> Self {
        let inferred_type = VarType::infer(&value);
        Self {
            name: name.into(),
            value,
            inferred_type,
            description: description.into(),
            comments: String::new(),
        }
    }
}

/// Variables of one file, in order of first declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentedVars {
    records: Vec<VariableRecord>,
}

impl CommentedVars {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariableRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableRecord> {
        self.records.iter()
    }

    /// Insert a record. A redeclared name replaces the earlier record in place.
    pub fn upsert(&mut self, record: VariableRecord) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }
}

impl<'a> IntoIterator for &'a CommentedVars {
    type Item = &'a VariableRecord;
    type IntoIter = std::slice::Iter<'a, VariableRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<VariableRecord> for CommentedVars {
    fn from_iter<I: IntoIterator<Item = VariableRecord>>(iter: I) -> Self {
        let mut vars = Self::default();
        for record in iter {
            vars.upsert(record);
        }
        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn infers_primitive_types() {
        assert_eq!(VarType::infer(&yaml("hello")), VarType::String);
        assert_eq!(VarType::infer(&yaml("\"8080\"")), VarType::String);
        assert_eq!(VarType::infer(&yaml("42")), VarType::Integer);
        assert_eq!(VarType::infer(&yaml("-7")), VarType::Integer);
    }

    #[test]
    fn booleans_are_never_integers() {
        assert_eq!(VarType::infer(&yaml("true")), VarType::Boolean);
        assert_eq!(VarType::infer(&yaml("false")), VarType::Boolean);
        assert_ne!(VarType::infer(&Value::Bool(true)), VarType::Integer);
    }

    #[rstest]
    #[case("1.5", "float")]
    #[case("[1, 2]", "list")]
    #[case("{a: 1}", "dict")]
    #[case("~", "null")]
    #[case("!vault abc", "vault")]
    fn falls_back_to_structural_names(#[case] src: &str, #[case] expected: &str) {
        assert_eq!(VarType::infer(&yaml(src)).as_str(), expected);
    }

    #[test]
    fn upsert_keeps_first_position() {
        let mut vars = CommentedVars::default();
        vars.upsert(VariableRecord::new("a", Value::from(1), "first"));
        vars.upsert(VariableRecord::new("b", Value::from(2), ""));
        vars.upsert(VariableRecord::new("a", Value::from(3), "second"));

        let names: Vec<_> = vars.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        let a = vars.get("a").unwrap();
        assert_eq!(a.value, Value::from(3));
        assert_eq!(a.description, "second");
    }
}
