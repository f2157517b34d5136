#![allow(dead_code)]

use kiln::settings::Settings;
use std::fs;
use std::path::Path;

/// Writes `contents` at `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Builds settings rooted in a test directory: templates live at
/// `root/templates`, the archive at `root/templates.tar.gz`.
pub fn settings_for(root: &Path, install_command: &[&str]) -> Settings {
    Settings::new(
        root.join("templates"),
        root.join("templates.tar.gz"),
        install_command.iter().map(|part| part.to_string()).collect(),
    )
    .unwrap()
}
