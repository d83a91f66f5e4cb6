//! Form pane rendering: category list, feature checkboxes, error banner,
//! and the submit control.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Focus;
use crate::theme::{
    BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Render the whole form pane
pub fn render_form(area: Rect, app: &App, frame: &mut Frame) {
    let category_height = (app.category_rows() as u16 + 2).min(12);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(category_height), // Category list
            Constraint::Min(4),                  // Feature checkboxes
            Constraint::Length(1),               // Error banner
            Constraint::Length(3),               // Submit control
        ])
        .split(area);

    render_categories(layout[0], app, frame);
    render_features(layout[1], app, frame);
    render_error_banner(layout[2], app, frame);
    render_submit(layout[3], app, frame);
}

fn pane_border(focused: bool) -> Style {
    let color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    Style::default().fg(color)
}

fn render_categories(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Categories;
    let block = Block::default()
        .title(" Select App Category ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(pane_border(focused));

    let mut lines = Vec::with_capacity(app.category_rows());
    for row in 0..app.category_rows() {
        let (indicator_selected, label) = if row == 0 {
            (app.selected_category.is_none(), "Choose a category".to_string())
        } else {
            let category = &app.categories[row - 1];
            (
                app.selected_category == Some(category.id),
                category.name.clone(),
            )
        };

        let indicator = if indicator_selected { "●" } else { "○" };
        let at_cursor = focused && row == app.category_cursor;
        let text_style = if at_cursor {
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
        } else if row == 0 {
            Style::default().fg(TEXT_MUTED)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", indicator),
                Style::default().fg(if indicator_selected {
                    CYAN_PRIMARY
                } else {
                    TEXT_MUTED
                }),
            ),
            Span::styled(label, text_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_features(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Features;
    let block = Block::default()
        .title(" Select App Features ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(pane_border(focused));

    let lines: Vec<Line> = if app.selected_category.is_none() {
        vec![Line::from(Span::styled(
            " Choose a category to see its features",
            Style::default().fg(TEXT_MUTED),
        ))]
    } else {
        app.features
            .iter()
            .enumerate()
            .map(|(row, feature)| {
                let checked = app.selected_features.contains(&feature.name);
                let checkbox = if checked { "[x]" } else { "[ ]" };
                let at_cursor = focused && row == app.feature_cursor;
                let name_style = if at_cursor {
                    Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TEXT_PRIMARY)
                };

                Line::from(vec![
                    Span::styled(
                        format!(" {} ", checkbox),
                        Style::default().fg(if checked { GREEN_SUCCESS } else { TEXT_MUTED }),
                    ),
                    Span::styled(feature.name.clone(), name_style),
                    Span::styled(
                        format!(" (Estimated hours: {})", feature.hours),
                        Style::default().fg(TEXT_SECONDARY),
                    ),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_error_banner(area: Rect, app: &App, frame: &mut Frame) {
    // Only one message at a time; the banner line stays empty otherwise
    if let Some(error) = &app.error {
        let banner = Paragraph::new(format!(" {}", error))
            .style(Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, area);
    }
}

fn render_submit(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Submit;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(pane_border(focused));

    let style = if focused {
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };

    let submit = Paragraph::new(Span::styled("Submit", style))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(submit, area);
}
