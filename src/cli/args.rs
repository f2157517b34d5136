use clap::Parser;
use log::LevelFilter;

use crate::constants::verbosity;
use crate::validation::{validate_project_type, ProjectType};

/// CLI arguments for Kiln.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project name. Prompted for when omitted or invalid.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Project template to scaffold ('backend' or 'monorepo'). Prompted for when omitted.
    #[arg(short, long, value_parser = validate_project_type)]
    pub template: Option<ProjectType>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Rebuild the bundled templates archive from the templates directory.
    #[arg(long, hide = true)]
    pub pack_templates: bool,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_bare_invocation() {
        let args = Args::parse_from(["kiln"]);
        assert_eq!(args.name, None);
        assert_eq!(args.template, None);
        assert_eq!(args.verbose, 0);
        assert!(!args.pack_templates);
    }

    #[test]
    fn parses_name_and_template() {
        let args = Args::parse_from(["kiln", "demo-api", "--template", "backend", "-vv"]);
        assert_eq!(args.name.as_deref(), Some("demo-api"));
        assert_eq!(args.template, Some(ProjectType::Backend));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_template_token() {
        assert!(Args::try_parse_from(["kiln", "--template", "fullstack"]).is_err());
    }

    #[test]
    fn parses_hidden_pack_flag() {
        let args = Args::parse_from(["kiln", "--pack-templates"]);
        assert!(args.pack_templates);
    }
}
