//! Animated "loading" line shown while a fetch is in flight.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme;

/// Owns the throbber animation state so every screen draws the same
/// loading line without repeating the widget setup.
#[derive(Default)]
pub struct Spinner {
    state: ThrobberState,
}

impl Spinner {
    /// Advance the animation one frame; call on every app tick.
    pub fn tick(&mut self) {
        self.state.calc_next();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, label: &str) {
        let throbber = Throbber::default()
            .label(label)
            .style(Style::default().fg(theme::CYAN))
            .throbber_style(Style::default().fg(theme::VIOLET));
        frame.render_stateful_widget(throbber, area, &mut self.state.clone());
    }
}
