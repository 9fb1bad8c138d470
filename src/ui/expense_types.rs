//! Expense types list view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the expense types list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.expense_types.is_empty() {
        let content = Paragraph::new("No expense types found.\nPress 'n' to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Expense types ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .expense_types
        .iter()
        .enumerate()
        .map(|(idx, expense_type)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let description = expense_type
                .description
                .as_deref()
                .unwrap_or("")
                .to_string();

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{:<20}", expense_type.name), style),
                Span::styled(
                    format!("limit {:>10.2}  ", expense_type.limit),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(description, Style::default().fg(Color::DarkGray)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Expense types — 'n' new, 'e' edit, 'd' delete ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}
