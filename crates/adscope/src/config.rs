//! CLI configuration — thin wrapper around `adscope_config` shared types.
//!
//! Adds the CLI-specific resolution steps that respect `GlobalOpts` flag
//! overrides (--base-url, --config, --output).

use clap::ValueEnum;

use adscope_config::Settings;
use adscope_core::ServiceConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Load the layered settings and apply CLI flag overrides on top.
pub fn resolved_settings(global: &GlobalOpts) -> Result<Settings, CliError> {
    let mut settings = adscope_config::load_settings(global.config.as_deref())?;
    if let Some(ref base_url) = global.base_url {
        settings.api.base_url.clone_from(base_url);
    }
    Ok(settings)
}

/// Validate the settings into a `ServiceConfig` for the controller.
pub fn service_config(settings: &Settings) -> Result<ServiceConfig, CliError> {
    Ok(settings.service_config()?)
}

/// Pick the output format: the `--output` flag wins, then the configured
/// default. A bad configured value is a config-layer problem, so it reports
/// which formats would have been accepted.
pub fn resolve_output(global: &GlobalOpts, settings: &Settings) -> Result<OutputFormat, CliError> {
    match global.output {
        Some(format) => Ok(format),
        None => {
            OutputFormat::from_str(&settings.output.format, true).map_err(|_| CliError::Config {
                message: format!(
                    "unknown output.format '{}' (expected table, json, json-compact, yaml, or plain)",
                    settings.output.format
                ),
            })
        }
    }
}
