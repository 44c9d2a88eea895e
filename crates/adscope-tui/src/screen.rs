//! Screen identity and the trait every screen implements.

use std::fmt;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// Identifies each primary TUI screen.
///
/// Campaigns and Insights show account-wide data; Detail and Campaign
/// Insights show whichever campaign was last opened from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Campaigns, // 1
    Insights,         // 2
    Detail,           // 3
    CampaignInsights, // 4
}

impl ScreenId {
    /// Every screen, in the order the header lists them.
    pub const ALL: [ScreenId; 4] = [
        Self::Campaigns,
        Self::Insights,
        Self::Detail,
        Self::CampaignInsights,
    ];

    /// Numeric key (1-4) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Campaigns => 1,
            Self::Insights => 2,
            Self::Detail => 3,
            Self::CampaignInsights => 4,
        }
    }

    /// Screen from a numeric key (1-4). Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Campaigns),
            2 => Some(Self::Insights),
            3 => Some(Self::Detail),
            4 => Some(Self::CampaignInsights),
            _ => None,
        }
    }

    /// Next screen in tab order, wrapping 4 → 1.
    pub fn next(self) -> Self {
        Self::from_number(self.number() % 4 + 1).unwrap_or_default()
    }

    /// Previous screen in tab order, wrapping 1 → 4.
    pub fn prev(self) -> Self {
        Self::from_number((self.number() + 2) % 4 + 1).unwrap_or_default()
    }

    /// Caption shown in the header strip.
    pub fn label(self) -> &'static str {
        match self {
            Self::Campaigns => "Campaigns",
            Self::Insights => "Insights",
            Self::Detail => "Detail",
            Self::CampaignInsights => "Campaign Insights",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A full-area view driven by the app loop.
///
/// Screens hold no channels and spawn no tasks: data arrives through
/// `update`, requests leave as returned actions, and all mutation
/// happens on the loop task.
pub trait Screen: Send {
    /// React to a key press; a returned action is queued on the loop.
    fn handle_key(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Apply a dispatched action; may queue a follow-up.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Paint into `area`.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Active-tab change notification; screens restyle their border.
    fn set_active(&mut self, _active: bool) {}
}
