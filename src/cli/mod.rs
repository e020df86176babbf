pub mod commands;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::app_config::ConfigOverrides;

/// The poorbox backend cli.
///
/// Poorbox is designed to be run with postgres running under docker
/// (typically exposed on port 5432). Credentials are read from files,
/// never from arguments or the environment, so they stay out of
/// process listings and shell history.
#[derive(Parser, Debug)]
#[command(name = "poorbox", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The network location of postgres [default: localhost:5432]
    #[arg(short = 'e', long, global = true, value_name = "HOST:PORT")]
    pub pg_endpoint: Option<String>,

    /// The file containing the postgres username and password
    /// separated by a newline [default: ./pg-secret]
    #[arg(short = 's', long, global = true, value_name = "PATH")]
    pub pg_identity_file: Option<PathBuf>,

    /// The file containing the TMDB API key [default: ./tmdb-secret]
    #[arg(long, global = true, value_name = "PATH")]
    pub tmdb_key_file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "POORBOX_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Flag values that take precedence over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            pg_endpoint: self.pg_endpoint.clone(),
            pg_identity_file: self.pg_identity_file.clone(),
            tmdb_key_file: self.tmdb_key_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify that every secret file loads
    Check,

    /// Show effective configuration and secret file state
    Status,

    /// Load postgres credentials and connect to the endpoint
    Connect,
}
