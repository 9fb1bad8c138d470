//! Expenses list view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the expenses list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let sorted_expenses = app.state.sorted_expenses();

    if sorted_expenses.is_empty() {
        let content = Paragraph::new("No expenses found.\nPress 'n' to record one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Expenses ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    // Header with sort info
    let sort_label = format!(
        "Sort: {} {}",
        app.state.expense_sort_field.label(),
        app.state.expense_sort_direction.symbol()
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(sort_label, Style::default().fg(Color::Cyan)),
        Span::styled(" [s]cycle [S]dir", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = sorted_expenses
        .iter()
        .enumerate()
        .map(|(idx, expense)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(
                    expense.date.format("%Y-%m-%d").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("  {:>10.2}", expense.amount), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(
                        "  {} / {} ({})",
                        expense.department_name(),
                        expense.employee_name(),
                        expense.type_name()
                    ),
                    style,
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Expenses — 'n' new ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(list, chunks[1]);
}
