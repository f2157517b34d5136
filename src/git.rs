use std::path::Path;
use std::process::{Command, Stdio};

use crate::constants::INITIAL_COMMIT_MESSAGE;

/// Returns whether the `git` binary is runnable on this system.
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn run_git(target_dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(target_dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Initializes a git repository in `target_dir` and creates an initial
/// commit.
///
/// Version control setup is convenience, never required for project
/// usability: a missing tool or any failing step downgrades to a warning
/// and later steps are skipped. This function never fails.
pub fn initialize_repository(target_dir: &Path) {
    if !is_git_available() {
        log::warn!("Git is not installed or not available. Skipping git initialization.");
        return;
    }

    if !run_git(target_dir, &["init"]) {
        log::warn!("Git initialization failed. You can initialize manually later.");
        return;
    }
    println!("Git repository initialized.");

    if !run_git(target_dir, &["add", "."]) {
        log::warn!("Failed to stage files. You can add them manually later.");
        return;
    }

    if !run_git(target_dir, &["commit", "-m", INITIAL_COMMIT_MESSAGE]) {
        log::warn!("Failed to create the initial commit. You can commit manually later.");
        return;
    }
    println!("Initial commit created.");
}
