//! Bordered summary card with one headline value.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Render one card: rounded border, dim label as the title, colored value.
pub fn render_card(frame: &mut Frame, area: Rect, label: &str, value: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {label} "))
        .title_style(Style::default().fg(theme::MUTED))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::panel_border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_span = Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(value_span).alignment(Alignment::Center),
        inner,
    );
}

/// Render a row of equally sized cards across `area`.
pub fn render_card_row(frame: &mut Frame, area: Rect, cards: &[(&str, String, Color)]) {
    if cards.is_empty() {
        return;
    }
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let n = cards.len() as u32;
    let constraints = vec![Constraint::Ratio(1, n); cards.len()];
    let columns = Layout::horizontal(constraints).split(area);

    for (slot, (label, value, color)) in columns.iter().zip(cards) {
        render_card(frame, *slot, label, value, *color);
    }
}
