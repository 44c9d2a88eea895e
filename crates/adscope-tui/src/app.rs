//! The app loop: owns every screen, turns input into actions, applies
//! actions to state, and paints frames.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use adscope_core::{Controller, FetchState};

use crate::action::Action;
use crate::event::{Event, EventFeed};
use crate::screen::{Screen, ScreenId};
use crate::screens::create_screens;
use crate::theme;
use crate::tui::TerminalGuard;

/// Coarse timer driving counters and auto-refresh.
const TICK_EVERY: Duration = Duration::from_millis(250);
/// Frame budget (~30 fps).
const FRAME_EVERY: Duration = Duration::from_millis(33);

/// Reachability of the campaign service, as implied by fetch results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Disconnected,
}

pub struct App {
    active_screen: ScreenId,
    previous_screen: Option<ScreenId>,
    screens: HashMap<ScreenId, Box<dyn Screen>>,
    quit: bool,
    connection: ConnectionStatus,
    show_help: bool,
    actions: mpsc::UnboundedSender<Action>,
    inbox: mpsc::UnboundedReceiver<Action>,
    controller: Controller,
    bridge_cancel: CancellationToken,
    /// Auto-refresh period in ticks; zero disables.
    refresh_every: u64,
    /// Ticks since the active screen last pulled its data.
    idle_ticks: u64,
    /// Campaign shown by the Detail and Campaign Insights screens.
    opened_campaign: Option<String>,
}

impl App {
    pub fn new(controller: Controller, refresh_secs: u64) -> Self {
        let (actions, inbox) = mpsc::unbounded_channel();
        Self {
            active_screen: ScreenId::Campaigns,
            previous_screen: None,
            screens: create_screens().into_iter().collect(),
            quit: false,
            connection: ConnectionStatus::default(),
            show_help: false,
            actions,
            inbox,
            controller,
            bridge_cancel: CancellationToken::new(),
            refresh_every: refresh_secs * 4,
            idle_ticks: 0,
            opened_campaign: None,
        }
    }

    /// Run until quit. Raw mode is held for exactly this scope.
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::acquire()?;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_active(true);
        }
        self.start_bridge();

        // First paint should already have list + aggregate data on the way
        self.controller.refresh_dashboard();

        let mut input = EventFeed::spawn(TICK_EVERY, FRAME_EVERY);
        info!("dashboard loop started");

        while !self.quit {
            let Some(event) = input.next().await else {
                break;
            };
            self.on_event(event)?;

            while let Ok(action) = self.inbox.try_recv() {
                self.apply(&action)?;
                if matches!(action, Action::Render) {
                    terminal.draw(|frame| self.draw(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        info!("dashboard loop ended");
        Ok(())
    }

    /// Forward store snapshots into the action queue from a side task.
    fn start_bridge(&self) {
        let store = self.controller.store().clone();
        let actions = self.actions.clone();
        let cancel = self.bridge_cancel.clone();
        tokio::spawn(async move {
            crate::data_bridge::run(store, actions, cancel).await;
        });
    }

    fn on_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Key(key) => self.on_key(key)?,
            // ratatui picks up the new geometry on the next draw
            Event::Resize(_, _) => Some(Action::Render),
            Event::Tick => Some(Action::Tick),
            Event::Render => Some(Action::Render),
        };
        if let Some(action) = action {
            self.actions.send(action)?;
        }
        Ok(())
    }

    /// Global keys first; anything unclaimed goes to the active screen.
    fn on_key(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.show_help {
            // Only the close keys do anything while the overlay is up
            return Ok(matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Action::ToggleHelp));
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit));
        }

        let global = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char(c @ '1'..='4') => u8::try_from(c)
                .ok()
                .and_then(|digit| ScreenId::from_number(digit - b'0'))
                .map(Action::SwitchScreen),
            KeyCode::Tab => Some(Action::SwitchScreen(self.active_screen.next())),
            KeyCode::BackTab => Some(Action::SwitchScreen(self.active_screen.prev())),
            KeyCode::Esc => Some(Action::GoBack),
            _ => None,
        };
        if global.is_some() {
            return Ok(global);
        }

        match self.screens.get_mut(&self.active_screen) {
            Some(screen) => screen.handle_key(key),
            None => Ok(None),
        }
    }

    fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.quit = true;
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    self.activate(*target);
                }
            }

            Action::GoBack => {
                if let Some(prev) = self.previous_screen.take() {
                    // Leaving a per-campaign screen for the list drops the
                    // selection; those screens fall back to their empty state.
                    if prev == ScreenId::Campaigns
                        && matches!(
                            self.active_screen,
                            ScreenId::Detail | ScreenId::CampaignInsights
                        )
                    {
                        self.opened_campaign = None;
                        self.controller.store().clear_selection();
                    }
                    self.actions.send(Action::SwitchScreen(prev))?;
                }
            }

            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }

            Action::Refresh => {
                self.request_data(self.active_screen);
            }

            Action::OpenCampaign(id) => {
                self.opened_campaign = Some(id.clone());
                self.actions.send(Action::SwitchScreen(ScreenId::Detail))?;
            }

            Action::OpenCampaignInsights(id) => {
                self.opened_campaign = Some(id.clone());
                // The insights screen titles itself with the campaign name
                self.controller.open_campaign(id);
                self.actions
                    .send(Action::SwitchScreen(ScreenId::CampaignInsights))?;
            }

            Action::Tick => {
                if self.refresh_every > 0 {
                    self.idle_ticks += 1;
                    if self.idle_ticks >= self.refresh_every {
                        self.actions.send(Action::Refresh)?;
                    }
                }
                // The active screen animates its spinner on ticks
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    let _ = screen.update(action);
                }
            }

            Action::Render => {}

            // Store updates fan out to every screen so background ones
            // stay warm for the next switch
            Action::CampaignsUpdated(_)
            | Action::AggregateUpdated(_)
            | Action::CampaignUpdated(_)
            | Action::CampaignInsightsUpdated(_) => {
                if let Some(status) = data_connection(action) {
                    self.connection = status;
                }
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.update(action)? {
                        self.actions.send(follow_up)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn activate(&mut self, target: ScreenId) {
        debug!("screen change: {} -> {}", self.active_screen, target);
        if let Some(old) = self.screens.get_mut(&self.active_screen) {
            old.set_active(false);
        }
        self.previous_screen = Some(self.active_screen);
        self.active_screen = target;
        if let Some(new) = self.screens.get_mut(&target) {
            new.set_active(true);
        }
        // Arriving at a screen refetches its backing data
        self.request_data(target);
    }

    /// Kick off the fetches behind a screen and restart the idle countdown.
    fn request_data(&mut self, screen: ScreenId) {
        self.idle_ticks = 0;
        match screen {
            ScreenId::Campaigns => self.controller.refresh_campaigns(),
            ScreenId::Insights => self.controller.refresh_aggregate(),
            ScreenId::Detail => {
                if let Some(id) = &self.opened_campaign {
                    self.controller.open_campaign(id);
                }
            }
            ScreenId::CampaignInsights => {
                if let Some(id) = &self.opened_campaign {
                    self.controller.open_campaign_insights(id);
                }
            }
        }
    }

    // ── Drawing ─────────────────────────────────────────────────────

    fn draw(&self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_header(frame, header);
        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, body);
        }
        self.draw_footer(frame, footer);

        if self.show_help {
            draw_help(frame, frame.area());
        }
    }

    /// Product title followed by the numbered screen tabs.
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" adscope ", theme::panel_title())];
        for id in ScreenId::ALL {
            let style = if id == self.active_screen {
                theme::active_tab()
            } else {
                theme::inactive_tab()
            };
            spans.push(Span::styled(
                format!(" {} {} ", id.number(), id.label()),
                style,
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Connection dot, data age, key hints; version right-aligned.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let [status, version] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(8)]).areas(area);

        let (dot, color) = match self.connection {
            ConnectionStatus::Connected => ("● connected", theme::GREEN),
            ConnectionStatus::Connecting => ("◐ connecting", theme::AMBER),
            ConnectionStatus::Disconnected => ("○ disconnected", theme::RED),
        };
        let age = match self.controller.store().data_age() {
            Some(age) => format!("updated {}s ago", age.num_seconds().max(0)),
            None => "no data yet".to_owned(),
        };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, Style::default().fg(color)),
            Span::styled(format!(" │ {age} │ "), theme::hint_label()),
            Span::styled("?", theme::hint_key()),
            Span::styled(" help  ", theme::hint_label()),
            Span::styled("r", theme::hint_key()),
            Span::styled(" refresh  ", theme::hint_label()),
            Span::styled("q", theme::hint_key()),
            Span::styled(" quit", theme::hint_label()),
        ]);
        frame.render_widget(Paragraph::new(line), status);

        let tag = Paragraph::new(Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION"), " "),
            theme::hint_label(),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(tag, version);
    }
}

const NAV_KEYS: [(&str, &str); 8] = [
    ("1-4", "jump to screen"),
    ("Tab / Shift-Tab", "cycle screens"),
    ("j/k ↑/↓", "move selection"),
    ("g / G", "first / last row"),
    ("[ / ]", "page back / forward"),
    ("Enter", "open campaign"),
    ("i", "campaign insights"),
    ("Esc", "back / close"),
];

const GLOBAL_KEYS: [(&str, &str); 4] = [
    ("f", "cycle status filter"),
    ("r", "refresh data"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Centered key-binding overlay on top of whatever is showing.
fn draw_help(frame: &mut Frame, area: Rect) {
    let width = 56.min(area.width.saturating_sub(4));
    let height = 20.min(area.height.saturating_sub(2));
    let overlay = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, overlay);
    let panel = Block::default()
        .title(" Keys ")
        .title_style(theme::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::focused_border())
        .style(Style::default().bg(theme::BG));
    let inner = panel.inner(overlay);
    frame.render_widget(panel, overlay);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Navigation",
            Style::default().fg(theme::CYAN),
        )),
    ];
    lines.extend(NAV_KEYS.iter().map(|&(key, what)| hint_line(key, what)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Global",
        Style::default().fg(theme::CYAN),
    )));
    lines.extend(GLOBAL_KEYS.iter().map(|&(key, what)| hint_line(key, what)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "                    Esc or ? to close",
        theme::hint_label(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn hint_line(key: &str, what: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<16} "), theme::hint_key()),
        Span::styled(what.to_owned(), theme::hint_label()),
    ])
}

/// Connection status implied by a data update, if any. A settled result
/// means the service answered; in-flight states say nothing either way.
fn data_connection(action: &Action) -> Option<ConnectionStatus> {
    match action {
        Action::CampaignsUpdated(state) => settled_status(state),
        Action::AggregateUpdated(state) => settled_status(state),
        Action::CampaignUpdated(state) => settled_status(state),
        Action::CampaignInsightsUpdated(state) => settled_status(state),
        _ => None,
    }
}

fn settled_status<T>(state: &FetchState<T>) -> Option<ConnectionStatus> {
    match state {
        FetchState::Loaded(_) | FetchState::NotFound => Some(ConnectionStatus::Connected),
        FetchState::Failed(_) => Some(ConnectionStatus::Disconnected),
        FetchState::Idle | FetchState::Loading => None,
    }
}
