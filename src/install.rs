use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Runs the package-manager install command inside `target_dir`.
///
/// Standard output and error are inherited so the user sees install
/// progress directly. A nonzero exit status is the one fatal failure in the
/// pipeline: a project without installed dependencies is unusable.
pub fn install_dependencies(target_dir: &Path, command: &[String]) -> Result<()> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::IoError(std::io::Error::other("install command is empty")))?;

    log::info!("Running '{}' in {}", command.join(" "), target_dir.display());
    let status = Command::new(program)
        .args(args)
        .current_dir(target_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        return Err(Error::InstallError { status });
    }
    Ok(())
}
