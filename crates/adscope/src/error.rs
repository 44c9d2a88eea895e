//! CLI error type with miette diagnostics and stable exit codes.

use adscope_core::CoreError;
use miette::Diagnostic;
use thiserror::Error;

/// Process exit codes, kept stable for scripting.
pub mod exit_code {
    pub const USAGE: u8 = 2;
    pub const CONFIG: u8 = 3;
    pub const API: u8 = 4;
    pub const NOT_FOUND: u8 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Failed to fetch {what}")]
    #[diagnostic(
        code(adscope::api::fetch_failed),
        help(
            "Check that the campaign service is running and reachable.\n\
             The service URL can be overridden with --base-url or ADSCOPE_BASE_URL."
        )
    )]
    FetchFailed {
        what: &'static str,
        #[source]
        source: adscope_core::ApiError,
    },

    #[error("Campaign not found: {id}")]
    #[diagnostic(
        code(adscope::api::not_found),
        help("Run `adscope campaigns list` to see the available campaign ids.")
    )]
    CampaignNotFound { id: String },

    #[error("Insights not found for campaign: {id}")]
    #[diagnostic(
        code(adscope::api::not_found),
        help("Run `adscope campaigns list` to see the available campaign ids.")
    )]
    InsightsNotFound { id: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(adscope::usage::invalid_value))]
    Validation { field: String, reason: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(adscope::config::invalid),
        help(
            "Check adscope.toml and the ADSCOPE_* environment variables.\n\
             `adscope config show --origin` lists every layer that was consulted."
        )
    )]
    Config { message: String },
}

impl CliError {
    /// Map the error to its process exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FetchFailed { .. } => exit_code::API,
            Self::CampaignNotFound { .. } | Self::InsightsNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Config { .. } => exit_code::CONFIG,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::FetchFailed { what, source } => Self::FetchFailed { what, source },
            CoreError::CampaignNotFound { id } => Self::CampaignNotFound { id },
            CoreError::InsightsNotFound { id } => Self::InsightsNotFound { id },
            CoreError::Config { message } => Self::Config { message },
        }
    }
}

impl From<adscope_config::ConfigError> for CliError {
    fn from(err: adscope_config::ConfigError) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
