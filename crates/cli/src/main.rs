mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use roledoc_core::config::{ConfigError, ConfigLoader, ResolvedConfig, default_config_path};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(
    name = "roledoc",
    version,
    about = "Generate README documentation for Ansible roles"
)]
struct Cli {
    /// Config file (defaults to ~/.config/roledoc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate README.md for a role
    Generate(GenerateArgs),

    /// Validate the role layout and galaxy metadata
    Check(RoleArgs),

    /// Print the mandatory and default variable tables
    Vars(VarsArgs),
}

#[derive(Debug, Args)]
pub struct RoleArgs {
    /// Path to the role directory
    #[arg(long, short = 'r', default_value = ".")]
    pub role_path: PathBuf,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub role: RoleArgs,

    /// Git URL used in the requirements snippet
    #[arg(long, short = 'u')]
    pub clone_url: Option<String>,

    /// Output file (defaults to README.md)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Custom README template
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct VarsArgs {
    #[command(flatten)]
    pub role: RoleArgs,

    /// Print as JSON instead of Markdown tables
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let (cfg, ignored) = load_config(cli.config.as_ref(), &cli.command);

    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }
    if let Some(e) = ignored {
        warn!(error = %e, "ignoring unusable config file");
    }
    debug!(config = ?cfg.source, "configuration loaded");

    match cli.command {
        Commands::Generate(args) => cmd::generate::run(&cfg, args),
        Commands::Check(args) => cmd::check::run(&args),
        Commands::Vars(args) => cmd::vars::run(&args),
    }

    logging::shutdown();
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Generate(_) => "generate",
            Commands::Check(_) => "check",
            Commands::Vars(_) => "vars",
        }
    }

    /// Only `generate` reads `[output]`; the others just want logging.
    fn needs_config(&self) -> bool {
        matches!(self, Commands::Generate(_))
    }
}

/// Load the config. Commands that do not need it fall back to defaults and
/// get the error back to log once logging is up.
fn load_config(
    path: Option<&PathBuf>,
    command: &Commands,
) -> (ResolvedConfig, Option<ConfigError>) {
    match ConfigLoader::load(path.map(PathBuf::as_path)) {
        Ok(rc) => (rc, None),
        Err(e) if !command.needs_config() => (ResolvedConfig::default(), Some(e)),
        Err(e) => {
            println!("FAIL roledoc {}", command.name());
            println!("{e}");
            if path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
