//! Terminal dashboard for the campaign service.
//!
//! Four screens (Campaigns, Insights, Detail, Campaign Insights) over the
//! watch-backed store in `adscope-core`. Rendering is ratatui; key input,
//! ticks, and data updates all flow through one action queue in `app`.
//!
//! Logging goes to a file — stdout belongs to the terminal UI.

mod action;
mod app;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use adscope_core::Controller;

use crate::app::App;

const DEFAULT_LOG_FILE: &str = "/tmp/adscope-tui.log";

/// Terminal dashboard for monitoring advertising campaigns.
#[derive(Parser, Debug)]
#[command(name = "adscope-tui", version, about)]
struct Cli {
    /// Campaign service URL, overriding the config file
    #[arg(short = 'u', long, env = "ADSCOPE_BASE_URL")]
    base_url: Option<String>,

    /// Read exactly this config file instead of searching for one
    #[arg(long, env = "ADSCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Where the log file goes
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// More logging per repeat (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Route tracing to the log file. Writing to stdout or stderr would tear
/// up the alternate screen, so nothing may log there while the UI runs.
/// The returned guard flushes buffered lines when dropped.
fn init_file_logging(cli: &Cli) -> WorkerGuard {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("adscope_tui={level},adscope_core={level}"))
    });

    let dir = cli.log_file.parent().unwrap_or_else(|| Path::new("/tmp"));
    let name = cli
        .log_file
        .file_name()
        .unwrap_or_else(|| OsStr::new("adscope-tui.log"));
    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_file_logging(&cli);

    // Crash hooks must be in place before raw mode is entered
    tui::install_crash_hooks()?;

    let mut settings = adscope_config::load_settings(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        settings.api.base_url.clone_from(base_url);
    }
    let service = settings.service_config()?;
    let controller = Controller::new(&service)?;

    info!(base_url = %controller.base_url(), "starting adscope-tui");

    App::new(controller, settings.ui.refresh_secs).run().await
}
