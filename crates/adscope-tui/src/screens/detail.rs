//! Detail screen — the opened campaign's full field set.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use adscope_core::{Campaign, FetchState, fmt, metrics};

use crate::action::Action;
use crate::screen::Screen;
use crate::theme;
use crate::widgets::badge;
use crate::widgets::spinner::Spinner;

pub struct DetailScreen {
    active: bool,
    campaign: FetchState<Arc<Campaign>>,
    spinner: Spinner,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            active: false,
            campaign: FetchState::Idle,
            spinner: Spinner::default(),
        }
    }
}

impl Screen for DetailScreen {
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('i') => Ok(self
                .campaign
                .data()
                .map(|c| Action::OpenCampaignInsights(c.id.clone()))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
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
        let block = Block::default()
            .title(" Campaign Detail ")
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

        match &self.campaign {
            FetchState::Idle => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "  No campaign opened",
                        Style::default().fg(theme::MUTED),
                    )),
                    Line::from(Span::styled(
                        "  Press Enter on the Campaigns screen to open one",
                        theme::hint_label(),
                    )),
                ];
                frame.render_widget(Paragraph::new(lines), inner);
            }
            FetchState::Loading => self.spinner.render(frame, inner, "  Loading campaign..."),
            FetchState::NotFound => {
                frame.render_widget(
                    Paragraph::new("  Campaign not found")
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
            FetchState::Loaded(campaign) => {
                frame.render_widget(Paragraph::new(detail_lines(campaign)), inner);
            }
        }
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

fn detail_lines(campaign: &Campaign) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", campaign.name),
                Style::default()
                    .fg(theme::VIOLET)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            badge::status_span(&campaign.status),
        ]),
        Line::from(""),
        field_line("ID", Span::styled(campaign.id.clone(), theme::field_value())),
        {
            let mut spans = vec![Span::styled(
                format!("  {:<11} ", "Platforms:"),
                theme::field_label(),
            )];
            spans.extend(badge::platform_spans(&campaign.platforms));
            Line::from(spans)
        },
        field_line(
            "Brand",
            Span::styled(
                if campaign.brand_id.is_empty() {
                    "-".to_owned()
                } else {
                    campaign.brand_id.clone()
                },
                theme::field_value(),
            ),
        ),
        field_line(
            "Budget",
            Span::styled(fmt::currency(campaign.budget), theme::field_value()),
        ),
        field_line(
            "Daily",
            Span::styled(fmt::currency(campaign.daily_budget), theme::field_value()),
        ),
    ];

    if let Some(days) = metrics::estimated_duration_days(campaign.budget, campaign.daily_budget) {
        lines.push(field_line(
            "Duration",
            Span::styled(
                format!("~{days} days"),
                Style::default().fg(theme::CYAN),
            ),
        ));
    }

    lines.push(field_line(
        "Created",
        Span::styled(fmt::date_long(&campaign.created_at), theme::field_value()),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  i ", theme::hint_key()),
        Span::styled("insights  ", theme::hint_label()),
        Span::styled("Esc ", theme::hint_key()),
        Span::styled("back", theme::hint_label()),
    ]));

    lines
}

fn field_line(label: &str, value: Span<'static>) -> Line<'static> {
    let label = format!("{label}:");
    Line::from(vec![
        Span::styled(format!("  {label:<11} "), theme::field_label()),
        value,
    ])
}
