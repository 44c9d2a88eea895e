//! `config` subcommands: inspect the resolved configuration.

use adscope_config::Settings;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show { origin } => show(global, origin),
    }
}

fn show(global: &GlobalOpts, origin: bool) -> Result<(), CliError> {
    let settings = config::resolved_settings(global)?;
    let format = config::resolve_output(global, &settings)?;

    let out = output::render_one(format, &settings, || render_toml(&settings), || "config".into());
    output::emit(&out);

    // The layer listing goes to stderr so stdout stays machine-readable
    if origin {
        eprintln!("Configuration layers (lowest to highest precedence):");
        eprintln!("  built-in defaults");
        for (path, exists) in adscope_config::config_sources(global.config.as_deref()) {
            let state = if exists { "loaded" } else { "not found" };
            eprintln!("  {} ({state})", path.display());
        }
        eprintln!("  ADSCOPE_* environment variables");
        eprintln!("  command-line flags");
    }
    Ok(())
}

fn render_toml(settings: &Settings) -> String {
    toml::to_string_pretty(settings).expect("value serializes")
}
