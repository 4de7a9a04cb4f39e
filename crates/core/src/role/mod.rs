//! Ansible role inspection: directory layout and galaxy metadata.

pub mod layout;
pub mod meta;

pub use layout::{EXAMPLE_FILE, LayoutError, REQUIRED_LAYOUT, RoleLayout, check_role_structure};
pub use meta::{GalaxyInfo, MetaError, MetaInfo, Platform, RoleInfo, load_meta};
