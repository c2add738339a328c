use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated (possibly best-effort with warnings)
    Success = 0,
    /// Application error (npm failure, unreadable dependency tree, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to run npm: {command}\nDetails: {details}\n\n💡 Hint: Please verify that npm is installed and available on your PATH")]
    NpmExecutionError { command: String, details: String },

    #[error("npm exited with an error: {command}\nDetails: {details}\n\n💡 Hint: Run `npm install` first, or pass --ignore-npm-errors to continue with npm's partial output")]
    NpmExitStatus { command: String, details: String },

    #[error("Failed to parse the dependency tree from {source_name}\nDetails: {details}\n\n💡 Hint: The input must be the JSON output of `npm ls --json --long`")]
    DependencyTreeParseError {
        source_name: String,
        details: String,
    },

    #[error("Invalid dependency tree: {reason}\n\n💡 Hint: The top level of the listing must be an object with a string \"path\" field")]
    InvalidDependencyTree { reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid npm project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for option and config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },
}
