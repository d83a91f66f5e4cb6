//! Cost breakdown table rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::app::App;
use crate::cost::{self, CostBreakdown};
use crate::theme::{BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// Render the results pane: the breakdown table after a successful submit,
/// a placeholder hint before that.
pub fn render_breakdown(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(" Cost Breakdown ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let Some(breakdown) = &app.cost_details else {
        let placeholder = Paragraph::new(" Submit the form to see a cost breakdown")
            .style(Style::default().fg(TEXT_MUTED))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    frame.render_widget(
        breakdown_table(app, breakdown).block(block),
        area,
    );
}

fn breakdown_table<'a>(app: &'a App, breakdown: &'a CostBreakdown) -> Table<'a> {
    let header_style = Style::default()
        .fg(TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD);

    let category_name = app
        .selected_category
        .and_then(|id| app.category_name(id))
        .unwrap_or("");

    let mut rows = vec![
        Row::new(vec![
            Span::styled("Category", header_style),
            Span::styled(category_name, header_style),
            Span::raw(""),
        ]),
        Row::new(vec![
            Span::styled("Feature", header_style),
            Span::styled("Hours", header_style),
            Span::styled("Cost", header_style),
        ]),
    ];

    for feature in &breakdown.features {
        rows.push(Row::new(vec![
            Span::styled(feature.name.as_str(), Style::default().fg(TEXT_PRIMARY)),
            Span::styled(
                format!("{}", feature.hours),
                Style::default().fg(TEXT_PRIMARY),
            ),
            Span::styled(
                format!("${:.2}", cost::feature_cost(feature)),
                Style::default().fg(TEXT_PRIMARY),
            ),
        ]));
    }

    let totals_style = Style::default()
        .fg(CYAN_PRIMARY)
        .add_modifier(Modifier::BOLD);
    rows.push(Row::new(vec![
        Span::styled("Total", totals_style),
        Span::styled(format!("{:.2} hours", breakdown.total_hours), totals_style),
        Span::styled(format!("${:.2}", breakdown.total_cost), totals_style),
    ]));

    Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
}
