//! Insights screen — account-wide aggregate metrics.
//!
//! Overview cards on top, then a status breakdown with percent-of-total
//! bars next to the performance panel, and a last-updated footer.

use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use adscope_core::{AggregateInsights, FetchState, fmt, metrics};

use crate::action::Action;
use crate::screen::Screen;
use crate::theme;
use crate::widgets::spinner::Spinner;
use crate::widgets::{card, meter};

const METER_WIDTH: u16 = 14;

pub struct InsightsScreen {
    active: bool,
    insights: FetchState<Arc<AggregateInsights>>,
    spinner: Spinner,
}

impl InsightsScreen {
    pub fn new() -> Self {
        Self {
            active: false,
            insights: FetchState::Idle,
            spinner: Spinner::default(),
        }
    }
}

impl Screen for InsightsScreen {
    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::AggregateUpdated(state) => {
                self.insights = state.clone();
            }
            Action::Tick => {
                self.spinner.tick();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Insights ")
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.active {
                theme::focused_border()
            } else {
                theme::panel_border()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.insights {
            FetchState::Idle | FetchState::Loading => {
                self.spinner.render(frame, inner, "  Loading insights...");
            }
            FetchState::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(format!("  {message}"))
                        .style(Style::default().fg(theme::RED)),
                    inner,
                );
            }
            FetchState::NotFound => {
                frame.render_widget(
                    Paragraph::new("  No insights available")
                        .style(Style::default().fg(theme::MUTED)),
                    inner,
                );
            }
            FetchState::Loaded(insights) => {
                let layout = Layout::vertical([
                    Constraint::Length(3), // overview cards
                    Constraint::Min(1),    // breakdown / performance panels
                    Constraint::Length(1), // footer
                ])
                .split(inner);

                render_cards(frame, layout[0], insights);

                let panels = Layout::horizontal([
                    Constraint::Ratio(1, 2),
                    Constraint::Ratio(1, 2),
                ])
                .split(layout[1]);
                render_breakdown(frame, panels[0], insights);
                render_performance(frame, panels[1], insights);

                let footer = Line::from(Span::styled(
                    format!("  Last updated: {}", fmt::date_long(&insights.timestamp)),
                    theme::hint_label(),
                ));
                frame.render_widget(Paragraph::new(footer), layout[2]);
            }
        }
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Share of `part` in `total` as a percentage, zero when the total is zero.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn per_campaign(value: u64, campaigns: u64) -> f64 {
    value as f64 / campaigns.max(1) as f64
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn render_cards(frame: &mut Frame, area: Rect, insights: &AggregateInsights) {
    let cards = [
        (
            "Campaigns",
            insights.total_campaigns.to_string(),
            theme::VIOLET,
        ),
        (
            "Impressions",
            fmt::compact_number(insights.total_impressions as f64),
            theme::CYAN,
        ),
        (
            "Clicks",
            fmt::compact_number(insights.total_clicks as f64),
            theme::BLUE,
        ),
        (
            "Conversions",
            fmt::compact_number(insights.total_conversions as f64),
            theme::GREEN,
        ),
        (
            "Spend",
            fmt::currency(insights.total_spend),
            theme::MAGENTA,
        ),
    ];
    card::render_card_row(frame, area, &cards);
}

fn render_breakdown(frame: &mut Frame, area: Rect, insights: &AggregateInsights) {
    let block = Block::default()
        .title(" Status Breakdown ")
        .title_style(theme::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = insights.total_campaigns;
    let lines = vec![
        Line::from(""),
        meter::meter_line(
            "Active",
            percent_of(insights.active_campaigns, total),
            &insights.active_campaigns.to_string(),
            METER_WIDTH,
            theme::GREEN,
        ),
        meter::meter_line(
            "Paused",
            percent_of(insights.paused_campaigns, total),
            &insights.paused_campaigns.to_string(),
            METER_WIDTH,
            theme::AMBER,
        ),
        meter::meter_line(
            "Completed",
            percent_of(insights.completed_campaigns, total),
            &insights.completed_campaigns.to_string(),
            METER_WIDTH,
            theme::BLUE,
        ),
        Line::from(""),
        Line::from(Span::styled("  Per campaign", theme::panel_title())),
        field_line(
            "Impressions",
            &format!("{:.0}", per_campaign(insights.total_impressions, total)),
        ),
        field_line(
            "Clicks",
            &format!("{:.0}", per_campaign(insights.total_clicks, total)),
        ),
        field_line(
            "Conversions",
            &format!("{:.0}", per_campaign(insights.total_conversions, total)),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_performance(frame: &mut Frame, area: Rect, insights: &AggregateInsights) {
    let block = Block::default()
        .title(" Performance ")
        .title_style(theme::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cost_per_conversion =
        metrics::cost_per_conversion(insights.total_spend, insights.total_conversions);

    let lines = vec![
        Line::from(""),
        field_line("Avg CTR", &format!("{:.2}%", insights.avg_ctr)),
        field_line("Avg CPC", &format!("${:.2}", insights.avg_cpc)),
        meter::meter_line(
            "Avg conv.",
            insights.avg_conversion_rate.min(100.0),
            &format!("{:.2}%", insights.avg_conversion_rate),
            METER_WIDTH,
            theme::GREEN,
        ),
        Line::from(""),
        field_line("Cost / conv.", &fmt::currency(cost_per_conversion)),
        field_line("Total spend", &fmt::currency(insights.total_spend)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<13} "), theme::field_label()),
        Span::styled(value.to_owned(), theme::field_value()),
    ])
}
