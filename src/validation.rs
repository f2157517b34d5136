use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;
use thiserror::Error;

use crate::constants::{BACKEND_RELOCATIONS, MONOREPO_RELOCATIONS};

/// Lowercase letters, digits, and hyphens only.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("name pattern is a valid regex"));

/// Reasons a project name or type token is rejected.
///
/// These are recovered at the prompt (the user is re-asked), never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project name is required")]
    EmptyName,

    #[error("Project name must contain only lowercase letters, numbers, and hyphens")]
    InvalidCharacters,

    #[error("Project name cannot start or end with a hyphen")]
    BoundaryHyphen,

    #[error("Unknown project type '{0}'. Expected 'backend' or 'monorepo'")]
    InvalidProjectType(String),
}

/// Selects which bundled template subtree to scaffold from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Backend,
    Monorepo,
}

impl ProjectType {
    pub const ALL: &'static [ProjectType] = &[ProjectType::Backend, ProjectType::Monorepo];

    /// The template subdirectory name for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Backend => "backend",
            ProjectType::Monorepo => "monorepo",
        }
    }

    /// Human-readable label shown in the selection prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Backend => "Backend only (API server with PostgreSQL)",
            ProjectType::Monorepo => "Monorepo (backend + frontend)",
        }
    }

    /// Post-copy file relocations applicable to this type, as
    /// (template-relative source, target-relative destination) pairs.
    pub fn relocations(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ProjectType::Backend => BACKEND_RELOCATIONS,
            ProjectType::Monorepo => MONOREPO_RELOCATIONS,
        }
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validates a project-type token against the closed set of types.
pub fn validate_project_type(token: &str) -> Result<ProjectType, ValidationError> {
    match token {
        "backend" => Ok(ProjectType::Backend),
        "monorepo" => Ok(ProjectType::Monorepo),
        other => Err(ValidationError::InvalidProjectType(other.to_string())),
    }
}

/// Validates a raw project name and returns the trimmed name on success.
///
/// A valid name is non-empty after trimming, matches `^[a-z0-9-]+$`, and
/// neither starts nor ends with a hyphen. No side effects.
pub fn validate_project_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidCharacters);
    }
    if trimmed.starts_with('-') || trimmed.ends_with('-') {
        return Err(ValidationError::BoundaryHyphen);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_alphanumeric_hyphen_names() {
        assert_eq!(validate_project_name("my-app-2"), Ok("my-app-2".to_string()));
        assert_eq!(validate_project_name("a"), Ok("a".to_string()));
        assert_eq!(validate_project_name("0"), Ok("0".to_string()));
        assert_eq!(validate_project_name("demo-api"), Ok("demo-api".to_string()));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_project_name("  my-app  "), Ok("my-app".to_string()));
    }

    #[test]
    fn rejects_empty_and_whitespace_only_names() {
        assert_eq!(validate_project_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_project_name("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(validate_project_name("ABC"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_project_name("a_b"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_project_name("my app"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_project_name("app!"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn rejects_boundary_hyphens() {
        assert_eq!(validate_project_name("-abc"), Err(ValidationError::BoundaryHyphen));
        assert_eq!(validate_project_name("abc-"), Err(ValidationError::BoundaryHyphen));
        assert_eq!(validate_project_name("-"), Err(ValidationError::BoundaryHyphen));
    }

    #[test]
    fn parses_known_project_types() {
        assert_eq!(validate_project_type("backend"), Ok(ProjectType::Backend));
        assert_eq!(validate_project_type("monorepo"), Ok(ProjectType::Monorepo));
    }

    #[test]
    fn rejects_unknown_project_types() {
        assert_eq!(
            validate_project_type("frontend"),
            Err(ValidationError::InvalidProjectType("frontend".to_string()))
        );
        assert_eq!(
            validate_project_type("Backend"),
            Err(ValidationError::InvalidProjectType("Backend".to_string()))
        );
    }

    #[test]
    fn project_type_maps_to_template_subdirectory() {
        assert_eq!(ProjectType::Backend.as_str(), "backend");
        assert_eq!(ProjectType::Monorepo.as_str(), "monorepo");
    }

    #[test]
    fn only_monorepo_carries_relocations() {
        assert!(ProjectType::Backend.relocations().is_empty());
        assert_eq!(
            ProjectType::Monorepo.relocations(),
            &[("apps/backend-biome.json.template", "apps/backend/biome.json")]
        );
    }
}
