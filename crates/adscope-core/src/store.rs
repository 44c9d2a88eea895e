// ── Reactive fetch store ──
//
// One cell per remote resource. Each cell pairs the authoritative
// FetchSlot (state plus generation counter) with a watch channel that
// broadcasts state clones to subscribers, so the TUI and tests can
// await changes instead of polling.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use adscope_api::{AggregateInsights, Campaign, CampaignInsights};

use crate::fetch::{FetchOutcome, FetchSlot, FetchState, FetchToken};

/// A single resource slot with push-based change notification.
pub(crate) struct FetchCell<T: Clone + Send + Sync + 'static> {
    slot: Mutex<FetchSlot<T>>,
    state: watch::Sender<FetchState<T>>,
}

impl<T: Clone + Send + Sync + 'static> FetchCell<T> {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            slot: Mutex::new(FetchSlot::new()),
            state,
        }
    }

    /// Move to `Loading` and hand out the token for this generation.
    pub(crate) fn begin(&self) -> FetchToken {
        let mut slot = self.slot.lock().expect("fetch slot lock poisoned");
        let token = slot.begin();
        // `send_replace` updates even with zero receivers.
        self.state.send_replace(slot.state().clone());
        token
    }

    /// Apply a completion. Stale tokens are dropped without notifying
    /// subscribers; returns whether the completion landed.
    pub(crate) fn complete(&self, token: FetchToken, outcome: FetchOutcome<T>) -> bool {
        let mut slot = self.slot.lock().expect("fetch slot lock poisoned");
        if !slot.complete(token, outcome) {
            return false;
        }
        self.state.send_replace(slot.state().clone());
        true
    }

    /// Back to `Idle`, invalidating any fetch still in flight.
    pub(crate) fn reset(&self) {
        let mut slot = self.slot.lock().expect("fetch slot lock poisoned");
        slot.reset();
        self.state.send_replace(FetchState::Idle);
    }

    /// Current state (cheap clone, payloads are `Arc`-wrapped).
    pub(crate) fn snapshot(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }
}

// ── Data store ───────────────────────────────────────────────────────

/// Shared state for everything fetched from the campaign service.
///
/// The list and aggregate cells hold dashboard-wide data; the campaign
/// and campaign-insights cells track whichever single campaign is
/// currently opened. Selecting a different campaign supersedes the
/// in-flight generation, so a slow response for the previous selection
/// can never overwrite the new one.
pub struct DataStore {
    pub(crate) campaigns: FetchCell<Arc<Vec<Campaign>>>,
    pub(crate) aggregate: FetchCell<Arc<AggregateInsights>>,
    pub(crate) campaign: FetchCell<Arc<Campaign>>,
    pub(crate) campaign_insights: FetchCell<Arc<CampaignInsights>>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub(crate) fn new() -> Self {
        let (last_refresh, _) = watch::channel(None);
        Self {
            campaigns: FetchCell::new(),
            aggregate: FetchCell::new(),
            campaign: FetchCell::new(),
            campaign_insights: FetchCell::new(),
            last_refresh,
        }
    }

    // ── Snapshots ────────────────────────────────────────────────────

    pub fn campaigns(&self) -> FetchState<Arc<Vec<Campaign>>> {
        self.campaigns.snapshot()
    }

    pub fn aggregate(&self) -> FetchState<Arc<AggregateInsights>> {
        self.aggregate.snapshot()
    }

    /// The currently opened campaign, if any.
    pub fn campaign(&self) -> FetchState<Arc<Campaign>> {
        self.campaign.snapshot()
    }

    pub fn campaign_insights(&self) -> FetchState<Arc<CampaignInsights>> {
        self.campaign_insights.snapshot()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_campaigns(&self) -> watch::Receiver<FetchState<Arc<Vec<Campaign>>>> {
        self.campaigns.subscribe()
    }

    pub fn subscribe_aggregate(&self) -> watch::Receiver<FetchState<Arc<AggregateInsights>>> {
        self.aggregate.subscribe()
    }

    pub fn subscribe_campaign(&self) -> watch::Receiver<FetchState<Arc<Campaign>>> {
        self.campaign.subscribe()
    }

    pub fn subscribe_campaign_insights(&self) -> watch::Receiver<FetchState<Arc<CampaignInsights>>> {
        self.campaign_insights.subscribe()
    }

    // ── Refresh bookkeeping ──────────────────────────────────────────

    /// Drop the opened campaign and its insights back to `Idle`.
    /// Called when the selection closes, so the next selection starts
    /// from a clean slot instead of briefly showing the previous one.
    pub fn clear_selection(&self) {
        self.campaign.reset();
        self.campaign_insights.reset();
    }

    pub(crate) fn mark_refreshed(&self) {
        self.last_refresh.send_replace(Some(Utc::now()));
    }

    /// When any fetch last completed successfully.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// Age of the freshest data, if anything has loaded yet.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|at| Utc::now() - at)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn begin_broadcasts_loading() {
        let cell: FetchCell<u32> = FetchCell::new();
        let mut rx = cell.subscribe();

        cell.begin();

        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_loading());
        assert!(cell.snapshot().is_loading());
    }

    #[test]
    fn stale_completion_does_not_notify_subscribers() {
        let cell: FetchCell<u32> = FetchCell::new();
        let mut rx = cell.subscribe();

        let first = cell.begin();
        let second = cell.begin();
        rx.borrow_and_update();

        assert!(!cell.complete(first, FetchOutcome::Data(1)));
        assert!(!rx.has_changed().unwrap());

        assert!(cell.complete(second, FetchOutcome::Data(2)));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().data(), Some(&2));
    }

    #[test]
    fn snapshot_tracks_the_slot() {
        let cell: FetchCell<u32> = FetchCell::new();
        assert!(cell.snapshot().is_idle());

        let token = cell.begin();
        cell.complete(token, FetchOutcome::Missing);
        assert!(cell.snapshot().is_not_found());
    }

    #[test]
    fn clear_selection_resets_both_selection_cells() {
        let store = DataStore::new();

        let token = store.campaign.begin();
        store.campaign.complete(
            token,
            FetchOutcome::Error("Failed to fetch campaign".into()),
        );
        store.campaign_insights.begin();

        store.clear_selection();

        assert!(store.campaign().is_idle());
        assert!(store.campaign_insights().is_idle());
    }

    #[test]
    fn refresh_timestamp_starts_unset() {
        let store = DataStore::new();
        assert_eq!(store.last_refresh(), None);
        assert!(store.data_age().is_none());

        store.mark_refreshed();
        assert!(store.last_refresh().is_some());
    }
}
