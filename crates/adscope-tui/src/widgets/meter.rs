//! Percentage meters rendered as filled/empty block runs.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::theme;

const FULL: &str = "█";
const BLANK: &str = "░";

/// How many of `width` blocks light up for `pct` percent. Out-of-range
/// percentages clamp rather than overflow the bar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn lit_blocks(pct: f64, width: u16) -> u16 {
    let share = (pct / 100.0).clamp(0.0, 1.0);
    ((share * f64::from(width)).round() as u16).min(width)
}

/// One meter line: `  {label:<12} ████░░░░░░ {value}`.
///
/// `pct` drives the bar fill; `value` is the text shown after it (which
/// is usually not the percentage itself, e.g. "CTR" shows "5.00%" while
/// the bar is scaled x10).
pub fn meter_line(label: &str, pct: f64, value: &str, width: u16, color: Color) -> Line<'static> {
    let lit = usize::from(lit_blocks(pct, width));
    let dark = usize::from(width) - lit;
    Line::from(vec![
        Span::styled(format!("  {label:<12} "), Style::default().fg(theme::FG)),
        Span::styled(FULL.repeat(lit), Style::default().fg(color)),
        Span::styled(BLANK.repeat(dark), Style::default().fg(theme::SELECTION_BG)),
        Span::styled(format!(" {value}"), Style::default().fg(theme::FG)),
    ])
}
