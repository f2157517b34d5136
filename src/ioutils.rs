use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::settings::ExclusionSet;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Copies a single file, creating the destination's parent directories and
/// overwriting any existing file.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Recursively copies `source` into `dest`, skipping entries whose name is
/// in the exclusion set.
///
/// Directories are created idempotently (an empty source directory still
/// yields a created destination directory); files are copied byte-for-byte,
/// overwriting existing destination files. Entries unrelated to the source
/// that already exist under `dest` are left alone.
pub fn copy_recursive(source: &Path, dest: &Path, exclusions: &ExclusionSet) -> Result<()> {
    if source.is_dir() {
        create_dir_all(dest)?;
        for entry in fs::read_dir(source)? {
            let entry = entry?;
            let name = entry.file_name();
            if exclusions.is_excluded(&name) {
                log::debug!("Skipping excluded entry: {}", entry.path().display());
                continue;
            }
            copy_recursive(&entry.path(), &dest.join(&name), exclusions)?;
        }
    } else {
        copy_file(source, dest)?;
    }
    Ok(())
}
