//! Derived ratio metrics over raw campaign counters.
//!
//! The service pre-computes `ctr`, `cpc`, and `conversion_rate`, which are
//! displayed as supplied. Everything here is for the locally derived
//! efficiency panel, and every ratio is defined for zero denominators so
//! the render path can never see NaN or Infinity.

use adscope_api::CampaignInsights;

/// Click-through rate as a percentage. 0 when there are no impressions.
pub fn ctr(clicks: u64, impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        clicks as f64 / impressions as f64 * 100.0
    }
}

/// Cost per click. 0 when there are no clicks.
pub fn cpc(spend: f64, clicks: u64) -> f64 {
    if clicks == 0 { 0.0 } else { spend / clicks as f64 }
}

/// Conversions as a percentage of clicks. 0 when there are no clicks.
pub fn conversion_rate(conversions: u64, clicks: u64) -> f64 {
    if clicks == 0 {
        0.0
    } else {
        conversions as f64 / clicks as f64 * 100.0
    }
}

/// Spend per conversion. The denominator is floored at 1, so a campaign
/// with zero conversions reports its full spend here rather than an error.
pub fn cost_per_conversion(spend: f64, conversions: u64) -> f64 {
    spend / conversions.max(1) as f64
}

/// Impressions needed per conversion, denominator floored at 1.
pub fn impressions_per_conversion(impressions: u64, conversions: u64) -> f64 {
    impressions as f64 / conversions.max(1) as f64
}

/// Cost per thousand impressions. 0 when there are no impressions.
pub fn cpm(spend: f64, impressions: u64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        spend / impressions as f64 * 1000.0
    }
}

/// Clicks per conversion, denominator floored at 1.
pub fn clicks_per_conversion(clicks: u64, conversions: u64) -> f64 {
    clicks as f64 / conversions.max(1) as f64
}

/// How long a campaign's budget lasts at its daily rate, rounded to whole
/// days. `None` when there is no daily budget to divide by.
pub fn estimated_duration_days(budget: f64, daily_budget: f64) -> Option<u64> {
    if daily_budget <= 0.0 {
        return None;
    }
    Some((budget / daily_budget).round() as u64)
}

/// All derived ratios for one set of counters, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub ctr: f64,
    pub cpc: f64,
    pub conversion_rate: f64,
    pub cost_per_conversion: f64,
    pub impressions_per_conversion: f64,
    pub cpm: f64,
    pub clicks_per_conversion: f64,
}

impl DerivedMetrics {
    pub fn from_counters(impressions: u64, clicks: u64, conversions: u64, spend: f64) -> Self {
        Self {
            ctr: ctr(clicks, impressions),
            cpc: cpc(spend, clicks),
            conversion_rate: conversion_rate(conversions, clicks),
            cost_per_conversion: cost_per_conversion(spend, conversions),
            impressions_per_conversion: impressions_per_conversion(impressions, conversions),
            cpm: cpm(spend, impressions),
            clicks_per_conversion: clicks_per_conversion(clicks, conversions),
        }
    }

    pub fn from_insights(insights: &CampaignInsights) -> Self {
        Self::from_counters(
            insights.impressions,
            insights.clicks,
            insights.conversions,
            insights.spend,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fmt;

    #[test]
    fn derived_metrics_canonical_example() {
        let m = DerivedMetrics::from_counters(1000, 50, 5, 100.0);

        assert_eq!(format!("{:.2}", m.ctr), "5.00");
        assert_eq!(format!("{:.2}", m.cpc), "2.00");
        assert_eq!(format!("{:.2}", m.conversion_rate), "10.00");
        assert_eq!(fmt::currency(m.cost_per_conversion), "$20.00");
        assert_eq!(format!("{:.1}", m.clicks_per_conversion), "10.0");
        assert_eq!(format!("{:.0}", m.impressions_per_conversion), "200");
    }

    #[test]
    fn zero_conversions_reports_full_spend() {
        assert_eq!(cost_per_conversion(100.0, 0), 100.0);
        assert_eq!(cost_per_conversion(42.5, 0), 42.5);
    }

    #[test]
    fn zero_denominators_are_zero_not_nan() {
        assert_eq!(ctr(5, 0), 0.0);
        assert_eq!(cpc(10.0, 0), 0.0);
        assert_eq!(conversion_rate(3, 0), 0.0);
        assert_eq!(cpm(50.0, 0), 0.0);
    }

    #[test]
    fn cpm_per_thousand() {
        assert_eq!(format!("{:.3}", cpm(100.0, 1000)), "100.000");
        assert_eq!(format!("{:.3}", cpm(4250.0, 120_000)), "35.417");
    }

    #[test]
    fn all_counters_zero_is_all_zeros() {
        let m = DerivedMetrics::from_counters(0, 0, 0, 0.0);

        assert_eq!(m.ctr, 0.0);
        assert_eq!(m.cpc, 0.0);
        assert_eq!(m.conversion_rate, 0.0);
        assert_eq!(m.cost_per_conversion, 0.0);
        assert_eq!(m.impressions_per_conversion, 0.0);
        assert_eq!(m.cpm, 0.0);
        assert_eq!(m.clicks_per_conversion, 0.0);
        assert!(m.ctr.is_finite());
    }

    #[test]
    fn duration_rounds_to_whole_days() {
        assert_eq!(estimated_duration_days(50_000.0, 1_500.0), Some(33));
        assert_eq!(estimated_duration_days(10_000.0, 10_000.0), Some(1));
        assert_eq!(estimated_duration_days(100.0, 0.0), None);
    }

    #[test]
    fn from_insights_uses_raw_counters() {
        let insights = CampaignInsights {
            impressions: 1000,
            clicks: 50,
            conversions: 5,
            spend: 100.0,
            // Upstream ratios deliberately disagree with the raw counters;
            // derivation must ignore them.
            ctr: 99.0,
            cpc: 99.0,
            conversion_rate: 99.0,
            timestamp: String::new(),
        };

        let m = DerivedMetrics::from_insights(&insights);
        assert_eq!(format!("{:.2}", m.ctr), "5.00");
    }
}
