use regexplorer::logging::{info_log, init_debug_logging};
use regexplorer::tui::{self, App};
use regexplorer::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if !cli.validate() {
        return ExitCode::FAILURE;
    }

    if cli.debug {
        match init_debug_logging() {
            Ok(path) => eprintln!("Debug log: {}", path.display()),
            Err(e) => eprintln!("{}", e),
        }
    }

    let mut app = App::new(cli.match_options());

    if let Some(file) = &cli.file {
        if let Err(e) = app.load_file(file) {
            eprintln!("{}", e);
            if let Some(suggestion) = e.get_recovery_suggestion() {
                eprintln!("{}", suggestion);
            }
            return ExitCode::FAILURE;
        }
    }

    app.update_pattern(cli.initial_pattern().to_string());
    info_log(&format!("Starting with options [{}]", cli.match_options().flags()));

    match tui::run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
