//! Color palette and the semantic styles the screens share.
//!
//! Colors are explicit RGB values so the dashboard looks the same no
//! matter how the user's 16-color scheme is set up.

use ratatui::style::{Color, Modifier, Style};

// ── Palette ──────────────────────────────────────────────────────────

pub const VIOLET: Color = Color::Rgb(187, 154, 247); // selection, active tab
pub const CYAN: Color = Color::Rgb(125, 207, 255); // titles, hint keys
pub const MAGENTA: Color = Color::Rgb(255, 117, 181); // spend accents
pub const AMBER: Color = Color::Rgb(224, 175, 104); // paused, warnings
pub const GREEN: Color = Color::Rgb(158, 206, 106); // active, connected
pub const RED: Color = Color::Rgb(247, 118, 142); // errors
pub const BLUE: Color = Color::Rgb(122, 162, 247); // completed, meta
pub const FG: Color = Color::Rgb(192, 202, 245); // body text
pub const MUTED: Color = Color::Rgb(86, 95, 137); // borders, labels, hints
pub const SELECTION_BG: Color = Color::Rgb(41, 46, 66);
pub const BG: Color = Color::Rgb(26, 27, 38);

// ── Semantic styles ──────────────────────────────────────────────────

/// Panel and overlay titles.
pub fn panel_title() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}

/// Border of the panel holding input focus.
pub fn focused_border() -> Style {
    Style::default().fg(VIOLET)
}

/// Border of any other panel.
pub fn panel_border() -> Style {
    Style::default().fg(MUTED)
}

/// Column headers of the campaign table.
pub fn header_row() -> Style {
    Style::default()
        .fg(CYAN)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Ordinary table rows.
pub fn body_row() -> Style {
    Style::default().fg(FG)
}

/// The table row under the cursor.
pub fn selected_row() -> Style {
    Style::default()
        .fg(VIOLET)
        .bg(SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

/// Tab of the screen currently shown.
pub fn active_tab() -> Style {
    Style::default().fg(VIOLET).add_modifier(Modifier::BOLD)
}

pub fn inactive_tab() -> Style {
    Style::default().fg(FG)
}

/// Field label in detail panels (e.g., "Budget:").
pub fn field_label() -> Style {
    Style::default().fg(MUTED)
}

/// Field value in detail panels.
pub fn field_value() -> Style {
    Style::default().fg(FG)
}

/// Descriptive half of a key hint ("quit" in "q quit").
pub fn hint_label() -> Style {
    Style::default().fg(MUTED)
}

/// Key half of a key hint.
pub fn hint_key() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}
