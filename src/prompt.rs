//! Thin wrappers over dialoguer prompts.
//!
//! Every prompt returns `Ok(None)` when the user cancels, so the caller can
//! exit cleanly at prompt boundaries instead of treating cancellation as an
//! error.

use dialoguer::{Confirm, Input, Select};

use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::Result;
use crate::validation::{validate_project_name, ProjectType};

/// Maps an interrupted interaction to a cancellation.
fn interaction<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err))
            if err.kind() == std::io::ErrorKind::Interrupted =>
        {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Asks which project type to scaffold.
pub fn select_project_type() -> Result<Option<ProjectType>> {
    let labels: Vec<&str> = ProjectType::ALL.iter().map(|t| t.label()).collect();
    let selection = interaction(
        Select::new()
            .with_prompt("What would you like to create?")
            .default(0)
            .items(&labels)
            .interact_opt(),
    )?
    .flatten();
    Ok(selection.map(|index| ProjectType::ALL[index]))
}

/// Asks for a project name, re-prompting inline until it validates.
pub fn prompt_project_name() -> Result<Option<String>> {
    let input = interaction(
        Input::<String>::new()
            .with_prompt("Project name")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .validate_with(|value: &String| validate_project_name(value).map(|_| ()))
            .interact_text(),
    )?;
    Ok(input.map(|value| value.trim().to_string()))
}

/// Asks a yes/no question with the given default.
pub fn confirm(prompt: &str, default: bool) -> Result<Option<bool>> {
    let answer = interaction(
        Confirm::new().with_prompt(prompt).default(default).interact_opt(),
    )?
    .flatten();
    Ok(answer)
}
