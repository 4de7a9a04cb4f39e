use roledoc_core::readme::ReadmeError;
use roledoc_core::role::{RoleInfo, RoleLayout, check_role_structure, load_meta};

use super::fail;
use crate::RoleArgs;

pub fn run(args: &RoleArgs) {
    match check(args) {
        Ok((layout, info)) => {
            println!("OK   roledoc check");
            println!("role:      {}", info.role_name);
            println!("author:    {}", info.author);
            println!("role_path: {}", layout.root.display());
            println!("defaults:  {}", layout.defaults_file.display());
            println!("vars:      {}", layout.vars_file.display());
            println!("meta:      {}", layout.meta_file.display());
            println!("tasks:     {}", layout.tasks_dir.display());
            if layout.example_file.is_file() {
                println!("example:   {}", layout.example_file.display());
            }
        }
        Err(e) => fail("check", e),
    }
}

fn check(args: &RoleArgs) -> Result<(RoleLayout, RoleInfo), ReadmeError> {
    let layout = check_role_structure(&args.role_path)?;
    let info = load_meta(&layout.meta_file)?.validate()?;
    Ok((layout, info))
}
