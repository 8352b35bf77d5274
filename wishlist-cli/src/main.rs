//! Wishlist CLI backed by a Google Sheets worksheet

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use wishlist_cli::api::Session;
use wishlist_cli::cli::{self, Cli};
use wishlist_cli::config::{Config, SETUP_HINTS};
use wishlist_cli::report::{ConsoleReporter, Reporter};

fn init_logging(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_logging(cli.log_filter());
    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env loaded: {}", e),
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let reporter = ConsoleReporter;

    let config = match Config::load(cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            for hint in SETUP_HINTS {
                reporter.info(hint);
            }
            return ExitCode::FAILURE;
        }
    };

    let session = match Session::open(&config).await {
        Ok(session) => session,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    match cli::commands::run(cli.command, &session, &reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
