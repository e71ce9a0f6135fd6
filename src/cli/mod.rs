pub mod auth;
pub mod devices;
pub mod output;
pub mod status;
pub mod switch;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_API_URL;
use crate::error::AppError;

#[derive(Parser)]
#[command(
    name = "sthelper",
    version,
    about = "SmartThings CLI - list, switch, dim and color your smart home devices"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (log HTTP requests and responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// SmartThings personal access token (defaults to the token saved by `login`)
    #[arg(long, env = "SMARTTHINGS_CLI_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the SmartThings API
    #[arg(long, env = "SMARTTHINGS_API_URL", global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all devices
    List,

    /// Get the status of the named devices, or of every device if none are given
    Status {
        /// Device names (quote names containing spaces)
        names: Vec<String>,
    },

    /// Turn on the named switches, or every switch if none are given
    Turnon {
        /// Switch names (quote names containing spaces)
        names: Vec<String>,

        /// Set the bulb to the specified brightness level (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        level: Option<u8>,

        /// Set the bulb to the specified color: white, blue, green, yellow,
        /// orange, purple, pink or red
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Turn off the named switches, or every switch if none are given
    Turnoff {
        /// Switch names (quote names containing spaces)
        names: Vec<String>,
    },

    /// Save a personal access token to the system keychain
    Login,

    /// Remove the saved token
    Logout,
}

/// Turn a batch tally into the command's exit status.
pub fn finish(failed: usize, total: usize) -> Result<(), AppError> {
    if failed == 0 {
        Ok(())
    } else {
        Err(AppError::PartialFailure { failed, total })
    }
}
