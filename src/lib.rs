pub mod actions;
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod resolve;
pub mod status;

use api::SmartThingsApi;
use cli::output::print_error;
use config::{OutputMode, RuntimeConfig};
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        output_mode: if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
        verbose: cli_args.verbose,
    };
    logging::init_logging(config.verbose);

    let result = dispatch(&cli_args, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

fn connect(cli_args: &cli::Cli) -> Result<SmartThingsApi, AppError> {
    let api_config = auth::credentials::api_config(&cli_args.api_url, cli_args.token.as_deref())?;
    SmartThingsApi::new(&api_config)
}

async fn dispatch(cli_args: &cli::Cli, config: &RuntimeConfig) -> Result<(), AppError> {
    match &cli_args.command {
        cli::Commands::Login => {
            cli::auth::handle_login(&cli_args.api_url, cli_args.token.as_deref()).await
        }
        cli::Commands::Logout => cli::auth::handle_logout(),
        cli::Commands::List => cli::devices::handle_list(&connect(cli_args)?, config).await,
        cli::Commands::Status { names } => {
            cli::status::handle(&connect(cli_args)?, names, config).await
        }
        cli::Commands::Turnon {
            names,
            level,
            color,
        } => {
            cli::switch::handle_on(
                &connect(cli_args)?,
                names,
                *level,
                color.as_deref(),
                config,
            )
            .await
        }
        cli::Commands::Turnoff { names } => {
            cli::switch::handle_off(&connect(cli_args)?, names, config).await
        }
    }
}
