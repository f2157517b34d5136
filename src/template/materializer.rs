use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::install::install_dependencies;
use crate::ioutils::{copy_file, copy_recursive};
use crate::settings::Settings;
use crate::validation::ProjectType;

/// Produces a concrete project directory from a bundled template.
///
/// Materialization is strictly ordered: resolve the template root, bulk-copy
/// it with the exclusion set, apply the type's post-copy relocations, then
/// install dependencies. After it succeeds, the destination mirrors the
/// template tree minus excluded names and marker-suffixed files, plus the
/// relocation targets.
pub struct Materializer<'a> {
    settings: &'a Settings,
    project_type: ProjectType,
    target_dir: PathBuf,
}

impl<'a> Materializer<'a> {
    pub fn new(settings: &'a Settings, project_type: ProjectType, target_dir: PathBuf) -> Self {
        Self { settings, project_type, target_dir }
    }

    /// The template subtree for the chosen project type.
    pub fn template_root(&self) -> PathBuf {
        self.settings.templates_base.join(self.project_type.as_str())
    }

    pub fn materialize(&self) -> Result<()> {
        let template_root = self.template_root();
        if !template_root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: template_root.display().to_string(),
            });
        }

        println!("Creating project...");
        copy_recursive(&template_root, &self.target_dir, &self.settings.exclusions)?;
        self.apply_relocations(&template_root)?;
        println!("Project structure created.");

        println!("Installing dependencies...");
        install_dependencies(&self.target_dir, &self.settings.install_command)?;
        println!("Dependencies installed.");
        Ok(())
    }

    /// Re-introduces marker-suffixed files at their true destinations.
    ///
    /// The bulk copy skips `*.template` files; each relocation rule copies
    /// one of them to its real path. A missing source is tolerated silently.
    fn apply_relocations(&self, template_root: &Path) -> Result<()> {
        for (source, dest) in self.project_type.relocations() {
            let source_path = template_root.join(source);
            if !source_path.exists() {
                log::debug!("Relocation source '{source}' not present, skipping");
                continue;
            }
            log::debug!("Relocating '{source}' to '{dest}'");
            copy_file(&source_path, &self.target_dir.join(dest))?;
        }
        Ok(())
    }
}
