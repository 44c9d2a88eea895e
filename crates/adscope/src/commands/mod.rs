//! One module per top-level subcommand.

pub mod campaigns;
pub mod config_cmd;
pub mod insights;
