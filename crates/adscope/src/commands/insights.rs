//! `insights` subcommand: account-wide aggregate metrics.

use adscope_core::{AggregateInsights, Controller, fmt, metrics};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

pub async fn handle(controller: &Controller, format: OutputFormat) -> Result<(), CliError> {
    let insights = controller.fetch_aggregate().await?;

    let out = output::render_one(format, &insights, || detail(&insights), || "insights".into());
    output::emit(&out);
    Ok(())
}

/// Account totals, upstream averages, then per-campaign averages derived
/// locally. Cost per conversion uses the floored denominator so an account
/// with zero conversions reports its full spend.
fn detail(insights: &AggregateInsights) -> String {
    let cost_per_conversion =
        metrics::cost_per_conversion(insights.total_spend, insights.total_conversions);
    let campaigns = insights.total_campaigns.max(1) as f64;

    [
        format!(
            "Campaigns:         {} ({} active, {} paused, {} completed)",
            insights.total_campaigns,
            insights.active_campaigns,
            insights.paused_campaigns,
            insights.completed_campaigns
        ),
        format!(
            "Impressions:       {}",
            fmt::compact_number(insights.total_impressions as f64)
        ),
        format!(
            "Clicks:            {}",
            fmt::compact_number(insights.total_clicks as f64)
        ),
        format!(
            "Conversions:       {}",
            fmt::compact_number(insights.total_conversions as f64)
        ),
        format!("Total spend:       {}", fmt::currency(insights.total_spend)),
        String::new(),
        format!("Avg CTR:           {:.2}%", insights.avg_ctr),
        format!("Avg CPC:           ${:.2}", insights.avg_cpc),
        format!("Avg conversion:    {:.2}%", insights.avg_conversion_rate),
        format!("Cost / conversion: {}", fmt::currency(cost_per_conversion)),
        String::new(),
        format!(
            "Per campaign:      {:.0} impressions, {:.0} clicks, {} spend",
            insights.total_impressions as f64 / campaigns,
            insights.total_clicks as f64 / campaigns,
            fmt::currency(insights.total_spend / campaigns)
        ),
        format!("Updated:           {}", fmt::date_long(&insights.timestamp)),
    ]
    .join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn detail_renders_totals_and_averages() {
        let insights = AggregateInsights {
            total_campaigns: 4,
            active_campaigns: 2,
            paused_campaigns: 1,
            completed_campaigns: 1,
            total_impressions: 2_500_000,
            total_clicks: 64_000,
            total_conversions: 1_800,
            total_spend: 98_500.0,
            avg_ctr: 2.56,
            avg_cpc: 1.54,
            avg_conversion_rate: 2.81,
            timestamp: "2025-02-01T12:00:00Z".into(),
        };

        insta::assert_snapshot!(detail(&insights), @r"
        Campaigns:         4 (2 active, 1 paused, 1 completed)
        Impressions:       2.5M
        Clicks:            64.0K
        Conversions:       1.8K
        Total spend:       $98,500.00

        Avg CTR:           2.56%
        Avg CPC:           $1.54
        Avg conversion:    2.81%
        Cost / conversion: $54.72

        Per campaign:      625000 impressions, 16000 clicks, $24,625.00 spend
        Updated:           Feb 1, 2025 12:00
        ");
    }

    #[test]
    fn zero_conversions_reports_full_spend() {
        let insights = AggregateInsights {
            total_spend: 500.0,
            ..AggregateInsights::default()
        };

        assert!(detail(&insights).contains("Cost / conversion: $500.00"));
    }
}
