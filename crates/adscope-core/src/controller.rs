// ── Controller ──
//
// Shared entry point for both frontends. Owns the API client and the
// DataStore. The TUI drives it through the fire-and-forget `refresh_*`
// and `open_*` methods, whose results land in the store; the CLI awaits
// the `fetch_*` methods and gets results back directly.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use adscope_api::{Campaign, CampaignClient, CampaignInsights};

use crate::config::ServiceConfig;
use crate::error::CoreError;
use crate::fetch::FetchOutcome;
use crate::store::DataStore;

/// Front door for both the CLI and the dashboard.
///
/// Cheaply cloneable via `Arc<ControllerInner>`; clones share the client
/// and the store.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    client: CampaignClient,
    store: Arc<DataStore>,
}

impl Controller {
    /// Create a controller from configuration. Does not touch the
    /// network; the first `refresh_*` or `fetch_*` call does.
    pub fn new(config: &ServiceConfig) -> Result<Self, CoreError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = CampaignClient::new(config.base_url.clone(), timeout).map_err(|e| {
            CoreError::Config {
                message: format!("failed to build HTTP client: {e}"),
            }
        })?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client. Used by tests pointing at a mock server.
    pub fn with_client(client: CampaignClient) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                client,
                store: Arc::new(DataStore::new()),
            }),
        }
    }

    /// The store this controller publishes results into.
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    /// The service root this controller talks to.
    pub fn base_url(&self) -> &url::Url {
        self.inner.client.base_url()
    }

    // ── Store-backed refreshes (TUI path) ────────────────────────────

    /// Re-fetch the campaign list in the background.
    pub fn refresh_campaigns(&self) {
        let token = self.inner.store.campaigns.begin();
        let ctrl = self.clone();
        tokio::spawn(async move {
            let outcome = match ctrl.inner.client.list_campaigns().await {
                Ok(campaigns) => {
                    ctrl.inner.store.mark_refreshed();
                    FetchOutcome::Data(Arc::new(campaigns))
                }
                Err(e) => {
                    warn!(error = %e, "campaign list fetch failed");
                    FetchOutcome::Error(CoreError::fetch("campaigns", e).to_string())
                }
            };
            ctrl.inner.store.campaigns.complete(token, outcome);
        });
    }

    /// Re-fetch the account-wide aggregate metrics in the background.
    pub fn refresh_aggregate(&self) {
        let token = self.inner.store.aggregate.begin();
        let ctrl = self.clone();
        tokio::spawn(async move {
            let outcome = match ctrl.inner.client.aggregate_insights().await {
                Ok(insights) => {
                    ctrl.inner.store.mark_refreshed();
                    FetchOutcome::Data(Arc::new(insights))
                }
                Err(e) => {
                    warn!(error = %e, "aggregate insights fetch failed");
                    FetchOutcome::Error(CoreError::fetch("insights", e).to_string())
                }
            };
            ctrl.inner.store.aggregate.complete(token, outcome);
        });
    }

    /// Fetch one campaign into the selection slot. A later `open_campaign`
    /// supersedes this one even if its response arrives first.
    pub fn open_campaign(&self, id: &str) {
        let token = self.inner.store.campaign.begin();
        let ctrl = self.clone();
        let id = id.to_owned();
        tokio::spawn(async move {
            let outcome = match ctrl.inner.client.get_campaign(&id).await {
                Ok(Some(campaign)) => {
                    ctrl.inner.store.mark_refreshed();
                    FetchOutcome::Data(Arc::new(campaign))
                }
                Ok(None) => FetchOutcome::Missing,
                Err(e) if e.is_not_found() => FetchOutcome::Missing,
                Err(e) => {
                    warn!(error = %e, id, "campaign fetch failed");
                    FetchOutcome::Error(CoreError::fetch("campaign", e).to_string())
                }
            };
            ctrl.inner.store.campaign.complete(token, outcome);
        });
    }

    /// Fetch one campaign's insight metrics into the selection slot.
    pub fn open_campaign_insights(&self, id: &str) {
        let token = self.inner.store.campaign_insights.begin();
        let ctrl = self.clone();
        let id = id.to_owned();
        tokio::spawn(async move {
            let outcome = match ctrl.inner.client.campaign_insights(&id).await {
                Ok(Some(insights)) => {
                    ctrl.inner.store.mark_refreshed();
                    FetchOutcome::Data(Arc::new(insights))
                }
                Ok(None) => FetchOutcome::Missing,
                Err(e) if e.is_not_found() => FetchOutcome::Missing,
                Err(e) => {
                    warn!(error = %e, id, "campaign insights fetch failed");
                    FetchOutcome::Error(CoreError::fetch("campaign insights", e).to_string())
                }
            };
            ctrl.inner.store.campaign_insights.complete(token, outcome);
        });
    }

    /// Kick both dashboard-wide fetches. Used by the periodic refresh.
    pub fn refresh_dashboard(&self) {
        self.refresh_campaigns();
        self.refresh_aggregate();
    }

    // ── Awaitable fetches (CLI path) ─────────────────────────────────

    pub async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, CoreError> {
        self.inner
            .client
            .list_campaigns()
            .await
            .map_err(|e| CoreError::fetch("campaigns", e))
    }

    pub async fn fetch_campaign(&self, id: &str) -> Result<Campaign, CoreError> {
        match self.inner.client.get_campaign(id).await {
            Ok(Some(campaign)) => Ok(campaign),
            Ok(None) => Err(CoreError::CampaignNotFound { id: id.to_owned() }),
            Err(e) if e.is_not_found() => Err(CoreError::CampaignNotFound { id: id.to_owned() }),
            Err(e) => Err(CoreError::fetch("campaign", e)),
        }
    }

    pub async fn fetch_campaign_insights(&self, id: &str) -> Result<CampaignInsights, CoreError> {
        match self.inner.client.campaign_insights(id).await {
            Ok(Some(insights)) => Ok(insights),
            Ok(None) => Err(CoreError::InsightsNotFound { id: id.to_owned() }),
            Err(e) if e.is_not_found() => Err(CoreError::InsightsNotFound { id: id.to_owned() }),
            Err(e) => Err(CoreError::fetch("campaign insights", e)),
        }
    }

    pub async fn fetch_aggregate(&self) -> Result<adscope_api::AggregateInsights, CoreError> {
        self.inner
            .client
            .aggregate_insights()
            .await
            .map_err(|e| CoreError::fetch("insights", e))
    }
}
