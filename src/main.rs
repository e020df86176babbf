mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    if let Err(e) = cli::logging::init_logging(args.verbose, args.quiet) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }

    let result = AppConfig::resolve(&args.overrides()).and_then(|config| {
        tracing::debug!(?config, "resolved configuration");
        match &args.command {
            Commands::Check => cli::commands::check::execute(&config),
            Commands::Status => cli::commands::status::execute(&config),
            Commands::Connect => cli::commands::connect::execute(&config),
        }
    });

    if let Err(e) = result {
        tracing::debug!(error = ?e, "startup aborted");
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
