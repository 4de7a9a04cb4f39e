use roledoc_core::config::{DEFAULT_OUTPUT, ResolvedConfig};
use roledoc_core::readme::{ReadmeError, RoleDoc, load_template, render, write_atomic};
use std::path::{Path, PathBuf};

use super::fail;
use crate::GenerateArgs;

pub fn run(cfg: &ResolvedConfig, args: GenerateArgs) {
    let role_path = &args.role.role_path;
    let output = output_path(cfg, &args, role_path);

    let doc = match generate(cfg, &args, &output) {
        Ok(doc) => doc,
        Err(e) => fail("generate", e),
    };

    println!("OK   roledoc generate");
    println!("role:      {}", doc.info.role_name);
    println!("role_path: {}", role_path.display());
    println!("output:    {}", output.display());
    println!("mandatory: {}", doc.mandatory_vars_table.len());
    println!("defaults:  {}", doc.default_vars_table.len());
}

fn generate(
    cfg: &ResolvedConfig,
    args: &GenerateArgs,
    output: &Path,
) -> Result<RoleDoc, ReadmeError> {
    let doc = RoleDoc::load(&args.role.role_path)?;

    let template_path = args.template.as_deref().or(cfg.template.as_deref());
    let template = load_template(template_path)?;
    let clone_url = args.clone_url.as_deref().or(cfg.clone_url.as_deref());

    let content = render(&doc, &template, clone_url);
    write_atomic(output, &content)?;
    Ok(doc)
}

/// `--output` and the built-in default are relative to the working
/// directory; a relative `[output] path` from the config is relative to the role.
fn output_path(cfg: &ResolvedConfig, args: &GenerateArgs, role_path: &Path) -> PathBuf {
    match (&args.output, &cfg.output_path) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) if path.is_relative() => role_path.join(path),
        (None, Some(path)) => path.clone(),
        (None, None) => PathBuf::from(DEFAULT_OUTPUT),
    }
}
