// adscope-api: Async Rust client for the campaign analytics HTTP API

pub mod client;
pub mod error;
pub mod types;

pub use client::CampaignClient;
pub use error::Error;
pub use types::{AggregateInsights, Campaign, CampaignInsights, CampaignStatus, Platform};
