//! Data bridge — connects the [`DataStore`] watch channels to TUI actions.
//!
//! Runs as a background task: subscribes to every store cell and forwards
//! each state change as an [`Action`] through the TUI's action channel.
//! The screens therefore see the full fetch lifecycle (Loading, Loaded,
//! NotFound, Failed) as ordinary actions.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use adscope_core::DataStore;

use crate::action::Action;

/// Forward store changes into the action channel until cancelled.
///
/// Sends one snapshot per cell up front so screens render the current
/// state immediately, then loops on the watch channels.
pub async fn run(
    store: Arc<DataStore>,
    actions: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut campaigns = store.subscribe_campaigns();
    let mut aggregate = store.subscribe_aggregate();
    let mut campaign = store.subscribe_campaign();
    let mut campaign_insights = store.subscribe_campaign_insights();

    // Initial snapshots
    let _ = actions.send(Action::CampaignsUpdated(
        campaigns.borrow_and_update().clone(),
    ));
    let _ = actions.send(Action::AggregateUpdated(
        aggregate.borrow_and_update().clone(),
    ));
    let _ = actions.send(Action::CampaignUpdated(campaign.borrow_and_update().clone()));
    let _ = actions.send(Action::CampaignInsightsUpdated(
        campaign_insights.borrow_and_update().clone(),
    ));

    // Pump store changes into the action queue until cancelled
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = campaigns.changed() => {
                let state = campaigns.borrow_and_update().clone();
                let _ = actions.send(Action::CampaignsUpdated(state));
            }
            Ok(()) = aggregate.changed() => {
                let state = aggregate.borrow_and_update().clone();
                let _ = actions.send(Action::AggregateUpdated(state));
            }
            Ok(()) = campaign.changed() => {
                let state = campaign.borrow_and_update().clone();
                let _ = actions.send(Action::CampaignUpdated(state));
            }
            Ok(()) = campaign_insights.changed() => {
                let state = campaign_insights.borrow_and_update().clone();
                let _ = actions.send(Action::CampaignInsightsUpdated(state));
            }
        }
    }

    debug!("data bridge shut down");
}
