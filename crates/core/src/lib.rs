//! Core library for `roledoc`: extracts variable documentation from an
//! Ansible role and renders it into a README.
//!
//! - [`vars`] pairs each variable in a defaults/vars file with its comment
//! - [`tasks`] finds variables asserted as defined in the task tree
//! - [`tables`] turns both into rendering-ready rows
//! - [`role`] checks the role layout and galaxy metadata
//! - [`readme`] renders and writes the document

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod config;
pub mod errors;
pub mod readme;
pub mod role;
pub mod tables;
pub mod tasks;
pub mod vars;

pub use errors::RoleDocError;
