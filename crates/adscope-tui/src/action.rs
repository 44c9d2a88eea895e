//! The action vocabulary. Every state change in the TUI is an [`Action`]
//! processed on the app loop; input handlers and the data bridge only
//! ever enqueue these.

use std::sync::Arc;

use adscope_core::{AggregateInsights, Campaign, CampaignInsights, FetchState};

use crate::screen::ScreenId;

/// Data variants carry whole [`FetchState`] snapshots from the store
/// watch channels, so screens observe Loading and Failed transitions
/// exactly like fresh data. Payloads are `Arc`-wrapped; cloning an
/// action is cheap.
#[derive(Debug, Clone)]
pub enum Action {
    // Loop plumbing
    Quit,
    Tick,
    Render,

    // Navigation
    SwitchScreen(ScreenId),
    GoBack,
    ToggleHelp,

    // User commands
    /// Re-fetch whatever the active screen shows.
    Refresh,
    /// Show one campaign on the Detail screen.
    OpenCampaign(String),
    /// Show one campaign's metrics on the Campaign Insights screen.
    OpenCampaignInsights(String),

    // Store updates forwarded by the data bridge
    CampaignsUpdated(FetchState<Arc<Vec<Campaign>>>),
    AggregateUpdated(FetchState<Arc<AggregateInsights>>),
    CampaignUpdated(FetchState<Arc<Campaign>>),
    CampaignInsightsUpdated(FetchState<Arc<CampaignInsights>>),
}
