//! Departments list view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the departments list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.departments.is_empty() {
        let content = Paragraph::new("No departments found.\nPress 'n' to create one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Departments ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .departments
        .iter()
        .enumerate()
        .map(|(idx, department)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(&department.name, style),
                Span::styled(
                    format!("  ({} employees)", department.number_of_employees),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Departments — 'n' new, 'l' monthly limit ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, area);
}
