//! Commented-value parsing for defaults and vars files.
//!
//! YAML parsers drop comments, so the file is read twice: once as data to
//! get the concrete values, once as raw lines to pair each top-level key
//! with the comment on the line directly above it. The two passes are
//! merged by key.

use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::types::{CommentedVars, VarType, VariableRecord};
use crate::errors::{RoleDocError, read_to_string};

/// Marker that starts a single-line comment.
pub const COMMENT_MARKER: char = '#';

/// Separator between a key and its value.
pub const KEY_SEPARATOR: char = ':';

/// YAML 1.1 boolean words that a YAML 1.2 parser reads as plain strings.
/// Ansible treats them as booleans when unquoted.
pub const YAML11_BOOLEANS: [(&str, bool); 12] = [
    ("yes", true),
    ("Yes", true),
    ("YES", true),
    ("on", true),
    ("On", true),
    ("ON", true),
    ("no", false),
    ("No", false),
    ("NO", false),
    ("off", false),
    ("Off", false),
    ("OFF", false),
];

/// Parse a commented YAML file from disk.
pub fn parse_file(path: &Path) -> Result<CommentedVars, RoleDocError> {
    debug!(path = %path.display(), "parsing commented variables");
    let content = read_to_string(path)?;
    parse_str(path, &content)
}

/// Parse commented YAML content. `source` is only used in error messages.
pub fn parse_str(source: &Path, content: &str) -> Result<CommentedVars, RoleDocError> {
    let parsed = load_top_level(source, content)?;
    let lines: Vec<&str> = content.lines().collect();

    let mut vars = CommentedVars::default();
    let mut pending_comment = String::new();

    for (i, line) in lines.iter().enumerate() {
        let stripped = line.trim();

        if let Some(text) = stripped.strip_prefix(COMMENT_MARKER) {
            let next_is_declaration =
                lines.get(i + 1).is_some_and(|next| next.contains(KEY_SEPARATOR));
            pending_comment =
                if next_is_declaration { text.trim().to_string() } else { String::new() };
        } else if let Some((raw_key, raw_value)) = stripped.split_once(KEY_SEPARATOR) {
            // Any declaration line consumes the pending comment, tracked or not.
            let description = std::mem::take(&mut pending_comment);

            if line.starts_with(char::is_whitespace) {
                continue;
            }

            let key = unquote(raw_key.trim());
            if let Some(value) = parsed.get(key) {
                let value = yaml11_boolean(raw_value, value).unwrap_or_else(|| value.clone());
                vars.upsert(VariableRecord::new(key, value, description));
            }
        }
    }

    debug!(path = %source.display(), count = vars.len(), "parsed variables");
    Ok(vars)
}

/// Load the document as a top-level mapping.
///
/// An empty document is an empty mapping. Repeated top-level keys keep the
/// last value.
fn load_top_level(source: &Path, content: &str) -> Result<Mapping, RoleDocError> {
    let value = match serde_yaml::from_str::<Value>(content) {
        Ok(value) => value,
        // serde_yaml rejects repeated keys outright; retry keeping the last value.
        Err(err) => match serde_yaml::from_str::<LastWins>(content) {
            Ok(LastWins(mapping)) => Value::Mapping(mapping),
            Err(_) => return Err(RoleDocError::parse(source, err)),
        },
    };

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(RoleDocError::schema(
            source,
            format!(
                "expected a top-level mapping of variables, found {}",
                VarType::infer(&other)
            ),
        )),
    }
}

/// Top-level mapping that tolerates repeated keys.
struct LastWins(Mapping);

impl<'de> Deserialize<'de> for LastWins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LastWinsVisitor;

        impl<'de> Visitor<'de> for LastWinsVisitor {
            type Value = LastWins;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping")
            }

            fn visit_map<A>(self, mut access: A) -> Result<LastWins, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut mapping = Mapping::new();
                while let Some((key, value)) = access.next_entry::<Value, Value>()? {
                    mapping.insert(key, value);
                }
                Ok(LastWins(mapping))
            }
        }

        deserializer.deserialize_map(LastWinsVisitor)
    }
}

/// Boolean for an unquoted YAML 1.1 boolean word.
///
/// A quoted or tagged scalar has raw text that differs from the parsed
/// string, so it stays a string.
fn yaml11_boolean(raw_value: &str, value: &Value) -> Option<Value> {
    let Value::String(parsed) = value else {
        return None;
    };
    let raw = raw_value.split(" #").next().unwrap_or_default().trim();
    if raw != parsed {
        return None;
    }
    YAML11_BOOLEANS
        .iter()
        .find(|(word, _)| *word == raw)
        .map(|(_, b)| Value::Bool(*b))
}

fn unquote(key: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = key.strip_prefix(quote).and_then(|k| k.strip_suffix(quote)) {
            return inner;
        }
    }
    key
}
