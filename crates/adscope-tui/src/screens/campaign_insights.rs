//! Per-campaign insights screen — raw counters, scaled ratio meters, and
//! the locally derived efficiency panel.

use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use adscope_core::metrics::DerivedMetrics;
use adscope_core::{Campaign, CampaignInsights, FetchState, fmt};

use crate::action::Action;
use crate::screen::Screen;
use crate::theme;
use crate::widgets::spinner::Spinner;
use crate::widgets::{card, meter};

const METER_WIDTH: u16 = 14;

pub struct CampaignInsightsScreen {
    active: bool,
    insights: FetchState<Arc<CampaignInsights>>,
    campaign: FetchState<Arc<Campaign>>,
    spinner: Spinner,
}

impl CampaignInsightsScreen {
    pub fn new() -> Self {
        Self {
            active: false,
            insights: FetchState::Idle,
            campaign: FetchState::Idle,
            spinner: Spinner::default(),
        }
    }
}

impl Screen for CampaignInsightsScreen {
    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CampaignInsightsUpdated(state) => {
                self.insights = state.clone();
            }
            Action::CampaignUpdated(state) => {
                self.campaign = state.clone();
            }
            Action::Tick => {
                self.spinner.tick();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match self.campaign.data() {
            Some(campaign) => format!(" Insights: {} ", campaign.name),
            None => " Campaign Insights ".to_owned(),
        };
        let block = Block::default()
            .title(title)
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
            FetchState::Idle => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  No campaign opened",
                        Style::default().fg(theme::MUTED),
                    )),
                    Line::from(Span::styled(
                        "  Press i on the Campaigns screen to view insights",
                        theme::hint_label(),
                    )),
                ];
                frame.render_widget(Paragraph::new(lines), inner);
            }
            FetchState::Loading => self.spinner.render(frame, inner, "  Loading insights..."),
            FetchState::NotFound => {
                frame.render_widget(
                    Paragraph::new("  Insights not found")
                        .style(Style::default().fg(theme::MUTED)),
                    inner,
                );
            }
            FetchState::Failed(message) => {
                frame.render_widget(
                    Paragraph::new(format!("  {message}"))
                        .style(Style::default().fg(theme::RED)),
                    inner,
                );
            }
            FetchState::Loaded(insights) => {
                let layout = Layout::vertical([
                    Constraint::Length(3), // counter cards
                    Constraint::Min(1),    // performance / efficiency panels
                    Constraint::Length(1), // footer
                ])
                .split(inner);

                render_cards(frame, layout[0], insights);

                let panels =
                    Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                        .split(layout[1]);
                render_performance(frame, panels[0], insights);
                render_efficiency(frame, panels[1], insights);

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

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn render_cards(frame: &mut Frame, area: Rect, insights: &CampaignInsights) {
    let cards = [
        (
            "Impressions",
            fmt::compact_number(insights.impressions as f64),
            theme::CYAN,
        ),
        (
            "Clicks",
            fmt::compact_number(insights.clicks as f64),
            theme::BLUE,
        ),
        (
            "Conversions",
            fmt::compact_number(insights.conversions as f64),
            theme::GREEN,
        ),
        ("Spend", fmt::currency(insights.spend), theme::MAGENTA),
    ];
    card::render_card_row(frame, area, &cards);
}

fn render_performance(frame: &mut Frame, area: Rect, insights: &CampaignInsights) {
    let block = Block::default()
        .title(" Performance ")
        .title_style(theme::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        meter::meter_line(
            "CTR",
            rate_bar_pct(insights.ctr),
            &format!("{:.2}%", insights.ctr),
            METER_WIDTH,
            theme::CYAN,
        ),
        meter::meter_line(
            "CPC",
            cpc_bar_pct(insights.cpc),
            &format!("${:.2}", insights.cpc),
            METER_WIDTH,
            theme::MAGENTA,
        ),
        meter::meter_line(
            "Conv. rate",
            rate_bar_pct(insights.conversion_rate),
            &format!("{:.2}%", insights.conversion_rate),
            METER_WIDTH,
            theme::GREEN,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_efficiency(frame: &mut Frame, area: Rect, insights: &CampaignInsights) {
    let block = Block::default()
        .title(" Efficiency ")
        .title_style(theme::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let derived = DerivedMetrics::from_insights(insights);
    let lines = vec![
        Line::from(""),
        field_line("Cost / conv.", &fmt::currency(derived.cost_per_conversion)),
        field_line(
            "Impr / conv.",
            &format!("{:.0}", derived.impressions_per_conversion),
        ),
        field_line(
            "Clicks / conv.",
            &format!("{:.1}", derived.clicks_per_conversion),
        ),
        field_line("CPM", &format!("${:.3}", derived.cpm)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<14} "), theme::field_label()),
        Span::styled(value.to_owned(), theme::field_value()),
    ])
}

/// CTR and conversion-rate meters are scaled so 10% fills the bar.
fn rate_bar_pct(rate: f64) -> f64 {
    (rate * 10.0).min(100.0)
}

/// The CPC meter is scaled so $10 per click fills the bar.
fn cpc_bar_pct(cpc: f64) -> f64 {
    (cpc / 10.0 * 100.0).min(100.0)
}
