/// Handles argument parsing and pipeline orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Fixed names, suffixes, and ports used across the tool.
pub mod constants;

/// Distribution archive packing and extraction for the bundled templates.
pub mod archive;

/// Optional git repository initialization.
pub mod git;

/// Dependency installation in generated projects.
pub mod install;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// User input and interaction handling.
pub mod prompt;

/// Run configuration resolved once at process start.
pub mod settings;

/// Core template materialization orchestration.
pub mod template;

/// Project name and type validators.
pub mod validation;
