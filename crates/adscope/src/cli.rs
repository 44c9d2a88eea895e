//! The clap command tree: global flags, subcommands, output formats.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// adscope -- campaign monitoring from the command line
#[derive(Debug, Parser)]
#[command(
    name = "adscope",
    version,
    about = "Monitor advertising campaigns from the command line",
    long_about = "A CLI and terminal dashboard for the adscope campaign analytics service.\n\n\
        Fetches campaigns and insight metrics over HTTP and renders them as\n\
        tables, JSON, YAML, or plain text for scripting.",
    subcommand_required = true,
    arg_required_else_help = true,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Campaign service base URL (overrides config)
    #[arg(long, short = 'u', env = "ADSCOPE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Config file to use instead of the default lookup
    #[arg(long, env = "ADSCOPE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format, normally table)
    #[arg(long, short = 'o', env = "ADSCOPE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored summary lines
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (the default)
    Table,
    /// Indented JSON
    Json,
    /// JSON on one line
    JsonCompact,
    /// YAML
    Yaml,
    /// Bare identifiers, one per line, for scripts
    Plain,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse campaigns and their metrics
    #[command(alias = "camp", alias = "c")]
    Campaigns(CampaignsArgs),

    /// Account-wide aggregate metrics
    #[command(alias = "i")]
    Insights,

    /// Inspect the resolved CLI configuration
    Config(ConfigArgs),

    /// Emit a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CampaignsArgs {
    #[command(subcommand)]
    pub command: CampaignsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CampaignsCommand {
    /// List campaigns
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one campaign in detail
    Show {
        /// Campaign id
        id: String,
    },

    /// Show one campaign's insight metrics
    Insights {
        /// Campaign id
        id: String,
    },
}

/// Filtering and paging for `campaigns list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter: all, active, paused, or completed
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Page to display (5 campaigns per page)
    #[arg(long, short = 'p', default_value = "1", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub page: usize,

    /// Print every matching campaign instead of one page
    #[arg(long, short = 'a')]
    pub all_pages: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the resolved configuration
    Show {
        /// Also list each config layer and whether it was found
        #[arg(long)]
        origin: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Which shell to target
    pub shell: clap_complete::Shell,
}
