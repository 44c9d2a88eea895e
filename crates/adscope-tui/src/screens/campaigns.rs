//! Campaigns screen — summary cards, status filter, and a paged table.
//!
//! The table shows five rows per page over the client-side filtered list;
//! `f` cycles the status filter, `[`/`]` turn pages, `Enter` opens the
//! selected campaign on the Detail screen, `i` jumps to its insights.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use adscope_core::view::filter_campaigns;
use adscope_core::{Campaign, CampaignPager, CampaignSummary, FetchState, StatusFilter, fmt};

use crate::action::Action;
use crate::screen::Screen;
use crate::theme;
use crate::widgets::spinner::Spinner;
use crate::widgets::{badge, card};

pub struct CampaignsScreen {
    active: bool,
    campaigns: FetchState<Arc<Vec<Campaign>>>,
    pager: CampaignPager,
    table_state: TableState,
    spinner: Spinner,
}

impl CampaignsScreen {
    pub fn new() -> Self {
        Self {
            active: false,
            campaigns: FetchState::Idle,
            pager: CampaignPager::new(),
            table_state: TableState::default().with_selected(0),
            spinner: Spinner::default(),
        }
    }

    fn filtered(&self) -> Vec<&Campaign> {
        self.campaigns
            .data()
            .map(|list| filter_campaigns(list, self.pager.filter()))
            .unwrap_or_default()
    }

    /// The rows on the current page.
    fn visible(&self) -> Vec<&Campaign> {
        let filtered = self.filtered();
        filtered
            .get(self.pager.page_range())
            .map(<[&Campaign]>::to_vec)
            .unwrap_or_default()
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Clamp `idx` into the current page and make it the cursor row.
    fn select(&mut self, idx: usize) {
        let last = self.visible().len().saturating_sub(1);
        self.table_state.select(Some(idx.min(last)));
    }

    fn selected_id(&self) -> Option<String> {
        self.visible()
            .get(self.selected_index())
            .map(|c| c.id.clone())
    }

    /// Re-derive pager bounds and selection after data or filter changes.
    fn sync_view(&mut self) {
        let count = self.filtered().len();
        self.pager.set_count(count);
        self.select(self.selected_index());
    }

    fn render_filter_line(&self, frame: &mut Frame, area: Rect) {
        let filter = self.pager.filter();
        let filter_style = if filter == StatusFilter::All {
            Style::default().fg(theme::FG)
        } else {
            Style::default()
                .fg(theme::AMBER)
                .add_modifier(Modifier::BOLD)
        };

        let line = Line::from(vec![
            Span::styled("  Filter: ", theme::hint_label()),
            Span::styled(filter.label(), filter_style),
            Span::styled("   Page ", theme::hint_label()),
            Span::styled(
                format!("{}/{}", self.pager.page(), self.pager.total_pages()),
                Style::default().fg(theme::FG),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Name", "Status", "Budget", "Daily", "Platforms", "Created"])
            .style(theme::header_row());

        let selected_idx = self.selected_index();
        let rows: Vec<Row> = self
            .visible()
            .iter()
            .enumerate()
            .map(|(i, campaign)| {
                let selected = i == selected_idx;
                let marker = if selected { "▸" } else { " " };
                let mut name_style = Style::default().fg(theme::CYAN);
                if selected {
                    name_style = name_style.add_modifier(Modifier::BOLD);
                }

                Row::new(vec![
                    Cell::from(format!("{marker}{}", campaign.name)).style(name_style),
                    Cell::from(Line::from(badge::status_span(&campaign.status))),
                    Cell::from(fmt::currency(campaign.budget)),
                    Cell::from(fmt::currency(campaign.daily_budget)),
                    Cell::from(Line::from(badge::platform_spans(&campaign.platforms))),
                    Cell::from(fmt::date_short(&campaign.created_at)),
                ])
                .style(if selected {
                    theme::selected_row()
                } else {
                    theme::body_row()
                })
            })
            .collect();

        let widths = [
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(13),
            Constraint::Length(12),
            Constraint::Length(22),
            Constraint::Length(13),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::selected_row());

        let mut cursor = self.table_state;
        frame.render_stateful_widget(table, area, &mut cursor);
    }
}

fn render_cards(frame: &mut Frame, area: Rect, campaigns: &[Campaign]) {
    let summary = CampaignSummary::of(campaigns);
    let cards = [
        ("Active", summary.active.to_string(), theme::GREEN),
        (
            "Total Budget",
            fmt::budget_k(summary.total_budget),
            theme::CYAN,
        ),
        (
            "Daily Budget",
            fmt::budget_k(summary.total_daily_budget),
            theme::BLUE,
        ),
        ("Paused", summary.paused.to_string(), theme::AMBER),
    ];
    card::render_card_row(frame, area, &cards);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("  j/k ", theme::hint_key()),
        Span::styled("select  ", theme::hint_label()),
        Span::styled("[/] ", theme::hint_key()),
        Span::styled("page  ", theme::hint_label()),
        Span::styled("f ", theme::hint_key()),
        Span::styled("filter  ", theme::hint_label()),
        Span::styled("Enter ", theme::hint_key()),
        Span::styled("detail  ", theme::hint_label()),
        Span::styled("i ", theme::hint_key()),
        Span::styled("insights", theme::hint_label()),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

impl Screen for CampaignsScreen {
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select(self.selected_index() + 1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select(self.selected_index().saturating_sub(1));
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.select(0);
                Ok(None)
            }
            KeyCode::Char('G') => {
                let last = self.visible().len().saturating_sub(1);
                self.select(last);
                Ok(None)
            }
            KeyCode::Char('[') => {
                self.pager.prev_page();
                self.select(0);
                Ok(None)
            }
            KeyCode::Char(']') => {
                self.pager.next_page();
                self.select(0);
                Ok(None)
            }
            KeyCode::Char('f') => {
                self.pager.cycle_filter();
                self.sync_view();
                self.select(0);
                Ok(None)
            }
            KeyCode::Enter => Ok(self.selected_id().map(Action::OpenCampaign)),
            KeyCode::Char('i') => Ok(self.selected_id().map(Action::OpenCampaignInsights)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CampaignsUpdated(state) => {
                self.campaigns = state.clone();
                self.sync_view();
            }
            Action::Tick => {
                self.spinner.tick();
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.campaigns {
            FetchState::Loaded(_) => format!(" Campaigns ({}) ", self.filtered().len()),
            _ => " Campaigns ".to_owned(),
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

        match &self.campaigns {
            FetchState::Idle | FetchState::Loading => {
                self.spinner.render(frame, inner, "  Loading campaigns...");
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
                    Paragraph::new("  No campaigns found")
                        .style(Style::default().fg(theme::MUTED)),
                    inner,
                );
            }
            FetchState::Loaded(campaigns) if campaigns.is_empty() => {
                frame.render_widget(
                    Paragraph::new("  No campaigns yet")
                        .style(Style::default().fg(theme::MUTED)),
                    inner,
                );
            }
            FetchState::Loaded(campaigns) => {
                let layout = Layout::vertical([
                    Constraint::Length(3), // summary cards
                    Constraint::Length(1), // filter / page line
                    Constraint::Min(1),    // table
                    Constraint::Length(1), // hints
                ])
                .split(inner);

                render_cards(frame, layout[0], campaigns);
                self.render_filter_line(frame, layout[1]);
                self.render_table(frame, layout[2]);
                render_hints(frame, layout[3]);
            }
        }
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
