//! Commented variable files (`defaults/main.yml`, `vars/main.yml`).
//!
//! Each top-level key becomes a [`VariableRecord`] carrying its parsed
//! value, an inferred [`VarType`] and the description taken from the
//! comment directly above the declaration.

pub mod parser;
pub mod types;

pub use parser::{COMMENT_MARKER, KEY_SEPARATOR, YAML11_BOOLEANS, parse_file, parse_str};
pub use types::{CommentedVars, VarType, VariableRecord};
