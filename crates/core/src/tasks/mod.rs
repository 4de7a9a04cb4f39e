//! Task tree scanning for mandatory variables.

pub mod scanner;
pub mod walker;

pub use scanner::{
    ASSERT_DIRECTIVES, BLOCK_DIRECTIVE, MAX_GROUPING_DEPTH, MandatoryVars, scan_file,
    scan_str, scan_tree,
};
pub use walker::TaskWalker;
