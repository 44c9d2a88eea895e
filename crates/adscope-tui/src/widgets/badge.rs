//! Status and platform badges — colored glyph + label spans.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use adscope_core::{CampaignStatus, Platform};

use crate::theme;

/// Badge color for a campaign status. Unknown statuses take the paused
/// treatment so they stand out without looking like an error.
pub fn status_color(status: &CampaignStatus) -> Color {
    match status {
        CampaignStatus::Active => theme::GREEN,
        CampaignStatus::Paused | CampaignStatus::Other(_) => theme::AMBER,
        CampaignStatus::Completed => theme::BLUE,
    }
}

/// Returns a styled `Span` like "● Active" for table cells and detail lines.
pub fn status_span(status: &CampaignStatus) -> Span<'static> {
    let glyph = match status {
        CampaignStatus::Active => "●",
        CampaignStatus::Paused | CampaignStatus::Other(_) => "◌",
        CampaignStatus::Completed => "◉",
    };
    Span::styled(
        format!("{glyph} {}", status.label()),
        Style::default().fg(status_color(status)),
    )
}

/// Single-character icon for a platform tag.
pub fn platform_icon(platform: &Platform) -> &'static str {
    match platform {
        Platform::Meta => "◆",
        Platform::Google => "●",
        Platform::Linkedin => "■",
        Platform::Other(_) => "▪",
    }
}

pub fn platform_color(platform: &Platform) -> Color {
    match platform {
        Platform::Meta => theme::BLUE,
        Platform::Google => theme::AMBER,
        Platform::Linkedin => theme::CYAN,
        Platform::Other(_) => theme::FG,
    }
}

/// One span per platform, e.g. "◆ meta  ● google".
pub fn platform_spans(platforms: &[Platform]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(platforms.len() * 2);
    for (i, platform) in platforms.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{} {}", platform_icon(platform), platform.as_str()),
            Style::default().fg(platform_color(platform)),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled("-", Style::default().fg(theme::MUTED)));
    }
    spans
}
