use std::process;
use colored::*;

use github_project_csv::cli::build_cli;
use github_project_csv::commands::handle_export;
use github_project_csv::logging;

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    if let Err(e) = logging::init_logging(verbose) {
        // a missing log file must not stop the export
        logging::set_verbose(verbose);
        if verbose {
            eprintln!("Could not initialize log file: {}", e);
        }
    }

    if let Err(e) = handle_export(&matches).await {
        logging::log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(log_file) = logging::get_log_file_path() {
            eprintln!("{}", format!("Log: {}", log_file.display()).dimmed());
        }
        process::exit(1);
    }
}
