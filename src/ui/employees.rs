//! Employees list view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the employees list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.employees.is_empty() {
        let content = Paragraph::new("No employees found.\nPress 'n' to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Employees ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .employees
        .iter()
        .enumerate()
        .map(|(idx, employee)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{:<24}", employee.name), style),
                Span::styled(
                    format!("{:<20}", employee.position),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    employee.department.name.clone(),
                    Style::default().fg(Color::Cyan),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Employees — 'n' new ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}
