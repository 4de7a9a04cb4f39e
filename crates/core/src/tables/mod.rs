//! Variable tables handed to the README renderer.

pub mod rows;

pub use rows::{
    DefaultVarRow, MandatoryVarRow, default_vars_table, display_value, mandatory_vars_table,
};
