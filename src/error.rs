use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to build exclusion patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot proceed: template archive '{archive_path}' not found. The installation may be corrupted.")]
    ArchiveMissingError { archive_path: String },

    #[error("Template extraction did not produce '{templates_dir}'.")]
    ArchiveExtractError { templates_dir: String },

    /// When the package-manager install command finished with a nonzero exit.
    #[error("Failed to install dependencies. Install command exited with status: {status}")]
    InstallError { status: ExitStatus },
}

/// Convenience type alias for Results with Kiln's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
