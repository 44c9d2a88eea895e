mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use adscope_core::Controller;

use crate::cli::{Cli, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}

/// Logging stays off unless ADSCOPE_LOG asks for it (e.g. ADSCOPE_LOG=debug).
/// Diagnostics go to stderr so they never mix with rendered output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ADSCOPE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    tracing::debug!(command = ?cli.command, "running");

    match cli.command {
        // Works offline: nothing here needs the service
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            let mut spec = Cli::command();
            clap_complete::generate(args.shell, &mut spec, "adscope", &mut std::io::stdout());
            Ok(())
        }

        Command::Campaigns(args) => {
            let (controller, format) = connect(&cli.global)?;
            commands::campaigns::handle(&controller, args, &cli.global, format).await
        }

        Command::Insights => {
            let (controller, format) = connect(&cli.global)?;
            commands::insights::handle(&controller, format).await
        }
    }
}

/// Resolve settings and build the service controller for the commands
/// that need one. No request is sent until a handler awaits a fetch.
fn connect(global: &GlobalOpts) -> Result<(Controller, OutputFormat), CliError> {
    let settings = config::resolved_settings(global)?;
    let format = config::resolve_output(global, &settings)?;
    let service = config::service_config(&settings)?;
    let controller = Controller::new(&service)?;
    Ok((controller, format))
}
