//! The four screens behind the tab bar.

pub mod campaign_insights;
pub mod campaigns;
pub mod detail;
pub mod insights;

use crate::screen::{Screen, ScreenId};

/// One boxed screen per [`ScreenId`], in tab order.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Screen>)> {
    vec![
        (
            ScreenId::Campaigns,
            Box::new(campaigns::CampaignsScreen::new()),
        ),
        (
            ScreenId::Insights,
            Box::new(insights::InsightsScreen::new()),
        ),
        (ScreenId::Detail, Box::new(detail::DetailScreen::new())),
        (
            ScreenId::CampaignInsights,
            Box::new(campaign_insights::CampaignInsightsScreen::new()),
        ),
    ]
}
