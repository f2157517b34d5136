use std::path::Path;

use crate::{
    archive,
    cli::args::Args,
    constants::ports,
    error::Result,
    git, prompt,
    settings::Settings,
    template::Materializer,
    validation::{validate_project_name, ProjectType},
};

/// Orchestrates the scaffolding flow: prompts, materialization, dependency
/// install, optional git init, and the final summary.
pub struct Runner {
    args: Args,
    settings: Settings,
}

impl Runner {
    pub fn new(args: Args, settings: Settings) -> Self {
        Self { args, settings }
    }

    /// Executes the complete scaffolding workflow.
    ///
    /// Cancellation at any prompt is not an error: the run reports
    /// "Operation cancelled" and returns `Ok`, so the process exits 0.
    pub fn run(self) -> Result<()> {
        if self.args.pack_templates {
            archive::pack_templates(&self.settings)?;
            println!("Templates archive written to {}.", self.settings.archive_path.display());
            return Ok(());
        }

        archive::extract_templates(&self.settings)?;

        let Some(project_type) = self.resolve_project_type()? else {
            return cancelled();
        };
        let Some(project_name) = self.resolve_project_name()? else {
            return cancelled();
        };

        let target_dir = std::env::current_dir()?.join(&project_name);
        if !self.confirm_overwrite(&target_dir, &project_name)? {
            return cancelled();
        }

        Materializer::new(&self.settings, project_type, target_dir.clone()).materialize()?;

        match prompt::confirm("Initialize git repository?", true)? {
            None => return cancelled(),
            Some(true) => git::initialize_repository(&target_dir),
            Some(false) => {}
        }

        self.print_summary(project_type, &project_name, &target_dir);
        Ok(())
    }

    fn resolve_project_type(&self) -> Result<Option<ProjectType>> {
        if let Some(project_type) = self.args.template {
            return Ok(Some(project_type));
        }
        prompt::select_project_type()
    }

    /// Uses the positional argument when it validates; otherwise prompts.
    fn resolve_project_name(&self) -> Result<Option<String>> {
        if let Some(raw) = &self.args.name {
            match validate_project_name(raw) {
                Ok(name) => return Ok(Some(name)),
                Err(err) => log::debug!("Ignoring invalid project name argument: {err}"),
            }
        }
        prompt::prompt_project_name()
    }

    /// Returns `false` when the user declined or cancelled overwriting an
    /// existing non-empty target directory.
    fn confirm_overwrite(&self, target_dir: &Path, project_name: &str) -> Result<bool> {
        if !target_dir.exists() {
            return Ok(true);
        }

        let is_empty = std::fs::read_dir(target_dir)?.next().is_none();
        if is_empty {
            return Ok(true);
        }

        let overwrite = prompt::confirm(
            &format!("Directory \"{project_name}\" already exists and is not empty. Overwrite it?"),
            false,
        )?;
        if overwrite != Some(true) {
            return Ok(false);
        }

        std::fs::remove_dir_all(target_dir)?;
        Ok(true)
    }

    fn print_summary(&self, project_type: ProjectType, project_name: &str, target_dir: &Path) {
        println!();
        println!("Success! Your {project_type} project is ready.");
        println!("Project created at: {}", target_dir.display());
        println!();
        println!("Next steps:");
        println!("  cd {project_name}");
        match project_type {
            ProjectType::Monorepo => {
                println!("  bun run dev:backend  # Start backend on http://localhost:{}", ports::BACKEND);
                println!("  bun run dev:frontend # Start frontend on http://localhost:{}", ports::FRONTEND);
            }
            ProjectType::Backend => {
                println!("  bun run dev          # Start backend on http://localhost:{}", ports::BACKEND);
            }
        }
        println!();
        println!("Check out the README.md for more information.");
    }
}

fn cancelled() -> Result<()> {
    println!("Operation cancelled.");
    Ok(())
}

/// Main entry point for CLI execution.
pub fn run(args: Args, settings: Settings) -> Result<()> {
    Runner::new(args, settings).run()
}
