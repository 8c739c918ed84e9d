use anyhow::Result;
use clap::Parser;
use scriptoids::commands::{self, BatchOutcome, Config, InitOptions};
use scriptoids::display::Display;
use scriptoids::runtime::RealRuntime;
use std::path::PathBuf;

/// scriptoids - a package manager for small utilities
///
/// Packages live in the package directory, one directory per package with a
/// scriptoid.toml manifest. Linking a package symlinks its entry point into the
/// bin directory, which should be on your PATH.
#[derive(Parser, Debug)]
#[command(author, version = env!("SCRIPTOIDS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Package bin directory (should be in your PATH)
    #[arg(long = "bindir", env = "SCRIPTOIDS_BIN", value_name = "PATH", global = true)]
    pub bin_dir: Option<PathBuf>,

    /// Package install directory (does not need to be in your PATH)
    #[arg(long = "pkgdir", env = "SCRIPTOIDS_PKG", value_name = "PATH", global = true)]
    pub pkg_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Print labels like "Success:" instead of symbols like check marks
    #[arg(long = "no-symbols", global = true)]
    pub no_symbols: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Link packages, enabling them in your PATH
    #[command(visible_alias = "l")]
    Link(PackagesArgs),

    /// Unlink packages, removing them from your PATH
    #[command(visible_alias = "u")]
    Unlink(PackagesArgs),

    /// List installed packages
    #[command(visible_alias = "ls")]
    List,

    /// Write a new scriptoid.toml manifest
    Init(InitArgs),
}

#[derive(clap::Args, Debug)]
pub struct PackagesArgs {
    /// Names of installed packages
    #[arg(value_name = "PACKAGE")]
    pub names: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Manifest path, or a directory to create scriptoid.toml in
    #[arg(value_name = "PATH", default_value = "scriptoid.toml")]
    pub path: PathBuf,

    /// Package name
    #[arg(long)]
    pub name: String,

    /// Entry point, relative to the package directory
    #[arg(long)]
    pub entrypoint: String,

    /// Package version
    #[arg(long, default_value = "0.0.0")]
    pub version: String,

    /// Package description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Overwrite an existing manifest
    #[arg(long, short = 'f')]
    pub force: bool,
}

fn run(cli: Cli) -> Result<BatchOutcome> {
    let display = Display::new(cli.no_color, cli.no_symbols);
    let (bin_dir, pkg_dir) = (cli.bin_dir, cli.pkg_dir);
    // Only commands that work on installed packages need the directories
    let config = || Config::new(&RealRuntime, bin_dir, pkg_dir, display);

    match cli.command {
        Commands::Link(args) => commands::link(RealRuntime, &args.names, config()?),
        Commands::Unlink(args) => commands::unlink(RealRuntime, &args.names, config()?),
        Commands::List => commands::list(RealRuntime, config()?),
        Commands::Init(args) => commands::init(
            RealRuntime,
            InitOptions {
                path: args.path,
                name: args.name,
                version: args.version,
                description: args.description,
                entrypoint: args.entrypoint,
                force: args.force,
            },
            display,
        ),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let outcome = run(cli)?;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
