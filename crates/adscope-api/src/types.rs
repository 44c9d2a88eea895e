// Campaign service response types
//
// Models for the campaign analytics JSON API. Each endpoint wraps its
// payload in a single-field envelope (`{"campaigns": [...]}`,
// `{"campaign": ...}`, `{"insights": ...}`). Numeric fields use
// `#[serde(default)]` because the service omits zero-valued counters in
// some responses.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Campaign status ──────────────────────────────────────────────────

/// Delivery status of a campaign.
///
/// The service only documents `active`, `paused`, and `completed`, but
/// undocumented values do appear; they are preserved verbatim in `Other`
/// and take the paused visual treatment at render time. Deserialization
/// is total: no status string is ever an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    /// Unrecognized status, kept verbatim for display.
    Other(String),
}

impl CampaignStatus {
    /// The wire string, lowercase for known variants.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Display form with the first letter capitalized ("Active").
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl From<String> for CampaignStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => Self::Active,
            "paused" => Self::Paused,
            "completed" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Platform ─────────────────────────────────────────────────────────

/// Advertising platform a campaign targets.
///
/// Same totality rule as [`CampaignStatus`]: unknown tags land in
/// `Other` and render with the generic badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Meta,
    Google,
    Linkedin,
    /// Unrecognized platform tag, kept verbatim for display.
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Meta => "meta",
            Self::Google => "google",
            Self::Linkedin => "linkedin",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Platform {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "meta" => Self::Meta,
            "google" => Self::Google,
            "linkedin" => Self::Linkedin,
            _ => Self::Other(raw),
        }
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.as_str().to_owned()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Campaign ─────────────────────────────────────────────────────────

/// A single advertising campaign from `GET /campaigns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    /// Total allocated spend.
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub daily_budget: f64,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    /// Owning brand. Opaque reference; no brand entity exists in this API.
    #[serde(default)]
    pub brand_id: String,
    /// ISO-8601 creation timestamp, passed through as text.
    #[serde(default)]
    pub created_at: String,
}

// ── Insights ─────────────────────────────────────────────────────────

/// Per-campaign metrics from `GET /campaigns/{id}/insights`.
///
/// `ctr`, `cpc`, and `conversion_rate` are computed upstream and consumed
/// as-is; the raw counters feed the locally derived efficiency metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignInsights {
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub conversions: u64,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub ctr: f64,
    #[serde(default)]
    pub cpc: f64,
    #[serde(default)]
    pub conversion_rate: f64,
    /// ISO-8601 "last updated" marker.
    #[serde(default)]
    pub timestamp: String,
}

/// Account-wide metrics from `GET /campaigns/insights`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateInsights {
    #[serde(default)]
    pub total_campaigns: u64,
    #[serde(default)]
    pub active_campaigns: u64,
    #[serde(default)]
    pub paused_campaigns: u64,
    #[serde(default)]
    pub completed_campaigns: u64,
    #[serde(default)]
    pub total_impressions: u64,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub total_conversions: u64,
    #[serde(default)]
    pub total_spend: f64,
    #[serde(default)]
    pub avg_ctr: f64,
    #[serde(default)]
    pub avg_cpc: f64,
    #[serde(default)]
    pub avg_conversion_rate: f64,
    #[serde(default)]
    pub timestamp: String,
}

// ── Response envelopes ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CampaignsEnvelope {
    pub campaigns: Vec<Campaign>,
}

#[derive(Debug, Deserialize)]
pub struct CampaignEnvelope {
    pub campaign: Option<Campaign>,
}

#[derive(Debug, Deserialize)]
pub struct CampaignInsightsEnvelope {
    pub insights: Option<CampaignInsights>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateInsightsEnvelope {
    pub insights: AggregateInsights,
}
