use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::constants::{
    EXCLUDED_COPY_NAMES, INSTALL_COMMAND, TEMPLATES_ARCHIVE_NAME, TEMPLATES_DIR_ENV,
    TEMPLATES_DIR_NAME, TEMPLATE_MARKER_SUFFIX,
};
use crate::error::Result;

/// Entry names and suffix patterns skipped during template copy.
#[derive(Debug)]
pub struct ExclusionSet {
    globs: GlobSet,
}

impl ExclusionSet {
    /// Builds the set from literal entry names plus the marker-suffix rule.
    pub fn new(names: &[&str], marker_suffix: &str) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for name in names {
            builder.add(Glob::new(name)?);
        }
        builder.add(Glob::new(&format!("*{marker_suffix}"))?);
        Ok(Self { globs: builder.build()? })
    }

    /// Matches against a single directory entry name, not a full path.
    pub fn is_excluded(&self, file_name: &OsStr) -> bool {
        self.globs.is_match(Path::new(file_name))
    }
}

/// Immutable run configuration, built once at process start and passed
/// explicitly to every pipeline stage.
#[derive(Debug)]
pub struct Settings {
    /// Directory holding one template subtree per project type.
    pub templates_base: PathBuf,
    /// Compressed template archive shipped alongside the binary.
    pub archive_path: PathBuf,
    pub exclusions: ExclusionSet,
    /// Package-manager install command, program first.
    pub install_command: Vec<String>,
}

impl Settings {
    pub fn new(
        templates_base: PathBuf,
        archive_path: PathBuf,
        install_command: Vec<String>,
    ) -> Result<Self> {
        let exclusions = ExclusionSet::new(EXCLUDED_COPY_NAMES, TEMPLATE_MARKER_SUFFIX)?;
        Ok(Self { templates_base, archive_path, exclusions, install_command })
    }

    /// Resolves settings for a normal run.
    ///
    /// `KILN_TEMPLATES_DIR` overrides the default `templates` directory next
    /// to the executable; the archive lives beside the templates directory.
    pub fn from_environment() -> Result<Self> {
        let templates_base = match std::env::var_os(TEMPLATES_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let exe = std::env::current_exe()?;
                match exe.parent() {
                    Some(parent) => parent.join(TEMPLATES_DIR_NAME),
                    None => PathBuf::from(TEMPLATES_DIR_NAME),
                }
            }
        };
        let archive_path = templates_base.with_file_name(TEMPLATES_ARCHIVE_NAME);
        let install_command = INSTALL_COMMAND.iter().map(|part| part.to_string()).collect();
        Self::new(templates_base, archive_path, install_command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_fixed_names_and_marker_suffix() {
        let exclusions = ExclusionSet::new(&["node_modules", ".git"], ".template").unwrap();
        assert!(exclusions.is_excluded(OsStr::new("node_modules")));
        assert!(exclusions.is_excluded(OsStr::new(".git")));
        assert!(exclusions.is_excluded(OsStr::new("config.json.template")));
        assert!(exclusions.is_excluded(OsStr::new(".template")));
    }

    #[test]
    fn keeps_ordinary_entries() {
        let exclusions = ExclusionSet::new(&["node_modules", ".git"], ".template").unwrap();
        assert!(!exclusions.is_excluded(OsStr::new("a.txt")));
        assert!(!exclusions.is_excluded(OsStr::new(".gitignore")));
        assert!(!exclusions.is_excluded(OsStr::new("template")));
        assert!(!exclusions.is_excluded(OsStr::new("node_modules.bak")));
    }

    // The override variable is process-global, so the fallback case shares
    // one test with the override case instead of racing a parallel test.
    #[test]
    fn environment_resolution_honors_override_and_exe_fallback() {
        std::env::set_var(TEMPLATES_DIR_ENV, "/opt/kiln/templates");
        let settings = Settings::from_environment().unwrap();
        assert_eq!(settings.templates_base, PathBuf::from("/opt/kiln/templates"));
        assert_eq!(settings.archive_path, PathBuf::from("/opt/kiln/templates.tar.gz"));
        assert_eq!(settings.install_command, vec!["bun".to_string(), "install".to_string()]);
        std::env::remove_var(TEMPLATES_DIR_ENV);

        // Without the override, templates resolve next to the executable
        let settings = Settings::from_environment().unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(settings.templates_base, exe_dir.join(TEMPLATES_DIR_NAME));
        assert_eq!(settings.archive_path, exe_dir.join(TEMPLATES_ARCHIVE_NAME));
    }

    #[test]
    fn settings_carry_the_default_exclusions() {
        let settings = Settings::new(
            PathBuf::from("templates"),
            PathBuf::from("templates.tar.gz"),
            vec!["bun".to_string(), "install".to_string()],
        )
        .unwrap();
        assert!(settings.exclusions.is_excluded(OsStr::new("node_modules")));
        assert!(settings.exclusions.is_excluded(OsStr::new("backend-biome.json.template")));
        assert!(!settings.exclusions.is_excluded(OsStr::new("package.json")));
    }
}
