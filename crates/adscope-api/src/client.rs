// Campaign service HTTP client
//
// Wraps `reqwest::Client` with campaign-service URL construction and
// envelope unwrapping. All methods return the unwrapped payload; a null
// envelope field maps to `Ok(None)` so callers can distinguish "no such
// entity" from a failed request.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::types::{
    AggregateInsights, AggregateInsightsEnvelope, Campaign, CampaignEnvelope, CampaignInsights,
    CampaignInsightsEnvelope, CampaignsEnvelope,
};

/// HTTP client for the campaign analytics service.
///
/// The service exposes four unauthenticated GET routes under `base_url`;
/// every response is a single-field JSON envelope which this client strips
/// before the caller sees it.
pub struct CampaignClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CampaignClient {
    /// Create a client for the service root at `base_url` (route paths
    /// are appended beneath it). The service is unauthenticated, so the
    /// request timeout is the only transport knob.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("adscope/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path beneath the service root.
    fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/{path}");
        Ok(Url::parse(&full)?)
    }

    // ── Request helper ───────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    ///
    /// Any non-2xx status is an [`Error::Status`]; malformed bodies keep a
    /// short preview in the error for debugging.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// List all campaigns.
    ///
    /// `GET /campaigns`
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let url = self.api_url("campaigns")?;
        debug!("listing campaigns");
        let envelope: CampaignsEnvelope = self.get_json(url).await?;
        Ok(envelope.campaigns)
    }

    /// Fetch a single campaign by id. `Ok(None)` when the service reports
    /// no such campaign.
    ///
    /// `GET /campaigns/{id}`
    pub async fn get_campaign(&self, id: &str) -> Result<Option<Campaign>, Error> {
        let url = self.api_url(&format!("campaigns/{id}"))?;
        debug!(id, "fetching campaign");
        let envelope: CampaignEnvelope = self.get_json(url).await?;
        Ok(envelope.campaign)
    }

    /// Fetch the insight metrics for one campaign. `Ok(None)` when the
    /// service has no insights for that id.
    ///
    /// `GET /campaigns/{id}/insights`
    pub async fn campaign_insights(&self, id: &str) -> Result<Option<CampaignInsights>, Error> {
        let url = self.api_url(&format!("campaigns/{id}/insights"))?;
        debug!(id, "fetching campaign insights");
        let envelope: CampaignInsightsEnvelope = self.get_json(url).await?;
        Ok(envelope.insights)
    }

    /// Fetch the account-wide aggregate metrics.
    ///
    /// `GET /campaigns/insights`
    pub async fn aggregate_insights(&self) -> Result<AggregateInsights, Error> {
        let url = self.api_url("campaigns/insights")?;
        debug!("fetching aggregate insights");
        let envelope: AggregateInsightsEnvelope = self.get_json(url).await?;
        Ok(envelope.insights)
    }
}
