//! Top-level frame layout.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::theme::CYAN_PRIMARY;

use super::{breakdown, form};

/// Render the whole frame from the current application state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: content area + bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main content area
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(area);

    // Horizontal split: form on the left, breakdown table on the right
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_layout[0]);

    form::render_form(panels[0], app, frame);
    breakdown::render_breakdown(panels[1], app, frame);

    // Bottom bar with focus indicator and keybinding hints
    let keybindings = Paragraph::new(format!(
        " {} | q: Quit | Tab: Focus | Up/Down: Move | Enter/Space: Select ",
        app.focus.label()
    ))
    .style(Style::default().fg(Color::Black).bg(CYAN_PRIMARY));
    frame.render_widget(keybindings, main_layout[1]);
}
