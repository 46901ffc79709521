use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed (including `help` and `--version`)
    Success = 0,
    /// Any failure: bad arguments, missing document, unknown field, I/O error, etc.
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Application-specific errors for SBOM document maintenance.
///
/// Domain operations and the file store raise these; the application layer
/// carries them inside `anyhow::Error`, so callers recover the kind with
/// `downcast_ref::<SbomError>()`.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Invalid package id: '{package_id}'\n\n💡 Hint: A package id must only contain lower-case letters, numbers, dashes, and periods")]
    InvalidPackageId { package_id: String },

    #[error("An sbom file already exists: {path}\n\n💡 Hint: Use `sbom info add` to update the existing document")]
    AlreadyInitialized { path: PathBuf },

    #[error("An sbom file has not been initialized: {path}\n\n💡 Hint: Use `sbom init <PACKAGE NAME>` to create one")]
    NotInitialized { path: PathBuf },

    #[error("Failed to decode sbom from json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains a valid sbom document")]
    Decode { path: PathBuf, details: String },

    #[error("Unknown flag '{flag}'")]
    UnknownField { flag: String },

    #[error("Invalid number of flags: {count} argument(s) given\n\n💡 Hint: Every field flag must be followed by exactly one value, e.g. --version 1.0.0")]
    MalformedArguments { count: usize },

    #[error("Package '{name}' does not exist")]
    PackageNotFound { name: String },

    #[error("Package '{name}' already exists\n\n💡 Hint: Either remove the package first or provide arguments to update the existing package")]
    PackageAlreadyExists { name: String },

    #[error("Missing argument: {what}")]
    MissingArgument { what: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
