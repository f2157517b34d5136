use kiln::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
    settings::Settings,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    let settings = match Settings::from_environment() {
        Ok(settings) => settings,
        Err(err) => return default_error_handler(err),
    };

    if let Err(err) = run(args, settings) {
        default_error_handler(err);
    }
}
