// ── Core error types ──
//
// User-facing errors from adscope-core. Consumers never see HTTP status
// codes or JSON parse failures directly: every fetch failure collapses to
// the uniform "Failed to fetch {what}" message, with the transport-level
// cause attached as `source` for logs and diagnostics.

use thiserror::Error;

/// Everything that can go wrong between a fetch request and stored data.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Fetch errors ─────────────────────────────────────────────────
    /// A request to the campaign service failed (transport, non-2xx, or
    /// undecodable body). `what` names the resource the way the banner
    /// does: "campaigns", "campaign", "insights", "campaign insights".
    #[error("Failed to fetch {what}")]
    FetchFailed {
        what: &'static str,
        #[source]
        source: adscope_api::Error,
    },

    // ── Missing entities ─────────────────────────────────────────────
    /// The service answered successfully but knows no such campaign.
    #[error("Campaign not found: {id}")]
    CampaignNotFound { id: String },

    /// The service answered successfully but has no insights for this campaign.
    #[error("Insights not found for campaign: {id}")]
    InsightsNotFound { id: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Wrap a transport-layer error with the resource name it was fetching.
    pub fn fetch(what: &'static str, source: adscope_api::Error) -> Self {
        Self::FetchFailed { what, source }
    }

    /// Returns `true` for the missing-entity variants, which render as an
    /// empty state rather than an error banner.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CampaignNotFound { .. } | Self::InsightsNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failed_message_is_uniform() {
        let err = CoreError::fetch(
            "campaigns",
            adscope_api::Error::Status {
                status: 500,
                url: "http://localhost/campaigns".into(),
            },
        );
        assert_eq!(err.to_string(), "Failed to fetch campaigns");
    }

    #[test]
    fn not_found_variants_are_not_errors_to_banner() {
        assert!(CoreError::CampaignNotFound { id: "c1".into() }.is_not_found());
        assert!(CoreError::InsightsNotFound { id: "c1".into() }.is_not_found());
        assert!(
            !CoreError::Config {
                message: "bad url".into()
            }
            .is_not_found()
        );
    }
}
