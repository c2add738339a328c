use clap::Parser;
use std::path::PathBuf;

use crate::sbom_generation::domain::{ComponentType, OmitType};

/// Generate CycloneDX SBOMs for npm projects
#[derive(Parser, Debug)]
#[command(name = "npm-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs for npm projects from the installed dependency tree",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(value_name = "PROJECT_DIR", conflicts_with = "path")]
    pub project_dir: Option<PathBuf>,

    /// Path to the project directory (alternative to the positional argument)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Dependency types to leave out: dev, optional or peer
    /// Can be specified multiple times: --omit dev --omit peer
    #[arg(long, value_name = "TYPE")]
    pub omit: Vec<OmitType>,

    /// Emit all components at the top level instead of nesting them by install path
    #[arg(long)]
    pub flatten_components: bool,

    /// Omit qualifiers from package URLs
    #[arg(long = "short-PURLs")]
    pub short_purls: bool,

    /// Leave out timestamp and serial number and sort the output for stable diffs
    #[arg(long)]
    pub output_reproducible: bool,

    /// Component type of the project itself: application, library or firmware
    #[arg(long, value_name = "TYPE")]
    pub mc_type: Option<ComponentType>,

    /// Read the dependency tree from package-lock.json only (npm >= 7)
    #[arg(long)]
    pub package_lock_only: bool,

    /// Only list the given workspace (npm >= 7)
    /// Can be specified multiple times
    #[arg(short, long = "workspace", value_name = "NAME")]
    pub workspaces: Vec<String>,

    /// Use npm's output even if npm exits with an error
    #[arg(long)]
    pub ignore_npm_errors: bool,

    /// Read a saved `npm ls --json --long` listing instead of running npm
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file path ("-" or unset writes to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Path to a config file (defaults to npm-sbom.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print notes about every skipped dependency
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Project directory from either the positional argument or `--path`
    pub fn project_directory(&self) -> PathBuf {
        self.project_dir
            .clone()
            .or_else(|| self.path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
