//! Constants used throughout the Kiln application

/// Suffix marking template files that must not land at their literal path
pub const TEMPLATE_MARKER_SUFFIX: &str = ".template";

/// Entry names always skipped during template copy
pub const EXCLUDED_COPY_NAMES: &[&str] = &["node_modules", ".git"];

/// Default project name offered at the name prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Directory holding one template subtree per project type
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Compressed template archive shipped alongside the binary
pub const TEMPLATES_ARCHIVE_NAME: &str = "templates.tar.gz";

/// Environment variable overriding the templates directory location
pub const TEMPLATES_DIR_ENV: &str = "KILN_TEMPLATES_DIR";

/// Package-manager install command, program first
pub const INSTALL_COMMAND: &[&str] = &["bun", "install"];

/// Commit message for the optional initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Post-copy file relocations for the monorepo template
pub const MONOREPO_RELOCATIONS: &[(&str, &str)] =
    &[("apps/backend-biome.json.template", "apps/backend/biome.json")];

/// Post-copy file relocations for the backend template
pub const BACKEND_RELOCATIONS: &[(&str, &str)] = &[];

/// Development server ports printed in the next-steps summary
pub mod ports {
    pub const BACKEND: u16 = 3000;
    pub const FRONTEND: u16 = 5173;
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
