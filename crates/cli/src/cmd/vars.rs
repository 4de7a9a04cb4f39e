use roledoc_core::readme::{RoleDoc, markdown_table};
use roledoc_core::tables::{DefaultVarRow, MandatoryVarRow};
use serde::Serialize;

use super::fail;
use crate::VarsArgs;

/// Both variable tables, as printed by `vars --json`.
#[derive(Debug, Serialize)]
struct VarsOutput<'a> {
    mandatory: &'a [MandatoryVarRow],
    defaults: &'a [DefaultVarRow],
}

pub fn run(args: &VarsArgs) {
    let doc = match RoleDoc::load(&args.role.role_path) {
        Ok(doc) => doc,
        Err(e) => fail("vars", e),
    };

    if args.json {
        let output = VarsOutput {
            mandatory: &doc.mandatory_vars_table,
            defaults: &doc.default_vars_table,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => fail("vars", e),
        }
        return;
    }

    println!("Mandatory variables:");
    print_table(&doc.mandatory_vars_table);
    println!();
    println!("Default variables:");
    print_table(&doc.default_vars_table);
}

fn print_table<T: tabled::Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("(none)");
    } else {
        println!("{}", markdown_table(rows));
    }
}
