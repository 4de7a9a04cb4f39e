//! README generation for a role.
//!
//! [`RoleDoc::load`] validates the role and runs the variable extraction
//! pipeline; [`render`] fills a template with the result; [`write_atomic`]
//! puts it on disk.

pub mod document;
pub mod engine;
pub mod markdown;
pub mod template;

pub use document::{
    EXAMPLE_HOSTS, ReadmeError, RoleDoc, build_render_context, load_template, render,
    write_atomic,
};
pub use engine::{RenderContext, render_string, slugify};
pub use markdown::{PlatformRow, markdown_table};
pub use template::DEFAULT_TEMPLATE;
