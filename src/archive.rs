use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tar::{Archive, Builder};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Extracts the bundled templates archive when the templates directory is
/// absent (first run of an installed binary). No-op when the directory
/// already exists.
pub fn extract_templates(settings: &Settings) -> Result<()> {
    if settings.templates_base.exists() {
        return Ok(());
    }

    if !settings.archive_path.exists() {
        return Err(Error::ArchiveMissingError {
            archive_path: settings.archive_path.display().to_string(),
        });
    }

    log::info!(
        "Extracting templates from '{}' into '{}'",
        settings.archive_path.display(),
        settings.templates_base.display()
    );
    let file = File::open(&settings.archive_path)?;
    let mut archive = Archive::new(GzDecoder::new(BufReader::new(file)));
    archive.unpack(&settings.templates_base)?;

    if !settings.templates_base.exists() {
        return Err(Error::ArchiveExtractError {
            templates_dir: settings.templates_base.display().to_string(),
        });
    }
    Ok(())
}

/// Compresses the templates directory into the distribution archive,
/// replacing any existing archive. Used when preparing a release so that
/// otherwise-ignored files survive packaging.
pub fn pack_templates(settings: &Settings) -> Result<()> {
    if !settings.templates_base.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: settings.templates_base.display().to_string(),
        });
    }

    if settings.archive_path.exists() {
        std::fs::remove_file(&settings.archive_path)?;
    }

    let file = File::create(&settings.archive_path)?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut archive = Builder::new(encoder);

    for entry in WalkDir::new(&settings.templates_base) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(&settings.templates_base)
            .map_err(std::io::Error::other)?;

        // Skip the root directory itself
        if relative_path.as_os_str().is_empty() {
            continue;
        }

        // Skip .git directories; they never belong in the distribution
        if relative_path.components().any(|c| c.as_os_str() == ".git") {
            continue;
        }

        if path.is_file() {
            debug!("Adding file: {}", relative_path.display());
            archive.append_path_with_name(path, relative_path)?;
        } else if path.is_dir() {
            debug!("Adding directory: {}", relative_path.display());
            archive.append_dir(relative_path, path)?;
        }
    }

    let encoder = archive.into_inner()?;
    encoder.finish()?;
    Ok(())
}
