use crate::ports::outbound::{DependencyTreeReader, ListingOptions};
use crate::sbom_generation::domain::OmitType;
use crate::shared::error::SbomError;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::Path;
use std::process::{Command, Output};
use std::time::Duration;

/// Depth that stands in for "all" on npm 6, which has no `--all`
const NPM6_MAX_DEPTH: u32 = 255;

/// NpmCliReader adapter that runs `npm ls` in the project directory
///
/// Detects the npm major version first, because npm 6 and npm 7+ spell the
/// listing options differently.
pub struct NpmCliReader {
    npm_command: String,
}

impl NpmCliReader {
    pub fn new() -> Self {
        Self::with_command(default_npm_command())
    }

    /// Uses `npm_command` instead of the platform's `npm`
    pub fn with_command(npm_command: impl Into<String>) -> Self {
        Self {
            npm_command: npm_command.into(),
        }
    }

    fn npm_major_version(&self, project_path: &Path) -> Result<u32> {
        let output = self.run(project_path, &["--version".to_string()])?;
        let version = String::from_utf8_lossy(&output.stdout);

        parse_major_version(&version).ok_or_else(|| {
            SbomError::NpmExecutionError {
                command: format!("{} --version", self.npm_command),
                details: format!("unrecognized npm version {:?}", version.trim()),
            }
            .into()
        })
    }

    fn run(&self, project_path: &Path, args: &[String]) -> Result<Output> {
        Command::new(&self.npm_command)
            .args(args)
            .current_dir(project_path)
            .output()
            .map_err(|e| {
                SbomError::NpmExecutionError {
                    command: self.command_line(args),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.npm_command.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for NpmCliReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for NpmCliReader {
    fn read_dependency_tree(&self, project_path: &Path, options: &ListingOptions) -> Result<String> {
        let major = self.npm_major_version(project_path)?;
        let args = ls_args(major, options)?;

        let spinner = start_spinner(&self.command_line(&args));
        let output = self.run(project_path, &args);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let output = output?;

        if !output.status.success() && !options.ignore_npm_errors {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SbomError::NpmExitStatus {
                command: self.command_line(&args),
                details: format!("{} {}", output.status, stderr.trim()),
            }
            .into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            SbomError::NpmExecutionError {
                command: self.command_line(&args),
                details: format!("output is not valid UTF-8: {}", e),
            }
            .into()
        })
    }
}

fn default_npm_command() -> &'static str {
    if cfg!(windows) {
        "npm.cmd"
    } else {
        "npm"
    }
}

/// Major version from `npm --version` output such as `10.2.4`
fn parse_major_version(version: &str) -> Option<u32> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()?
        .parse()
        .ok()
}

/// Arguments for `npm ls` on the given npm major version
fn ls_args(npm_major: u32, options: &ListingOptions) -> Result<Vec<String>> {
    let mut args: Vec<String> = ["ls", "--json", "--long"].map(String::from).to_vec();

    if npm_major >= 7 {
        args.push("--all".to_string());
        args.extend(options.omit.iter().map(|omit| format!("--omit={}", omit)));
        if options.package_lock_only {
            args.push("--package-lock-only".to_string());
        }
        args.extend(
            options
                .workspaces
                .iter()
                .map(|workspace| format!("--workspace={}", workspace)),
        );
    } else {
        if options.package_lock_only || !options.workspaces.is_empty() {
            return Err(SbomError::Validation {
                message: format!(
                    "--package-lock-only and --workspace need npm 7 or later (found npm {})",
                    npm_major
                ),
            }
            .into());
        }
        args.push(format!("--depth={}", NPM6_MAX_DEPTH));
        if options.omit.contains(&OmitType::Dev) {
            args.push("--production".to_string());
        }
    }

    Ok(args)
}

fn start_spinner(command_line: &str) -> Option<ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    spinner.set_message(format!("Running {}", command_line));
    Some(spinner)
}
