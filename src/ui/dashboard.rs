//! Dashboard summary view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(summary) = &app.state.dashboard else {
        let content = Paragraph::new("No dashboard data.\nPress 'r' to refresh.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Dashboard ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(content, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),          // Totals
            Constraint::Percentage(55),     // Per-department table
            Constraint::Min(0),             // Recent expenses
        ])
        .split(area);

    draw_totals(frame, chunks[0], app, summary);
    draw_department_rows(frame, chunks[1], summary);
    draw_recent_expenses(frame, chunks[2], summary);
}

fn draw_totals(
    frame: &mut Frame,
    area: Rect,
    _app: &App,
    summary: &crate::state::DashboardSummary,
) {
    let totals = &summary.summary;
    let remaining = (totals.total_limit - totals.total_spent).max(0.0);

    let content = vec![
        Line::from(vec![
            Span::raw("Total limit: "),
            Span::styled(
                format!("{:.2}", totals.total_limit),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" | Spent: "),
            Span::styled(
                format!("{:.2}", totals.total_spent),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" | Remaining: "),
            Span::styled(
                format!("{remaining:.2}"),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "'r' refresh | 'x' sign out",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Dashboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);
}

fn draw_department_rows(frame: &mut Frame, area: Rect, summary: &crate::state::DashboardSummary) {
    let mut content = Vec::new();
    if summary.by_department.is_empty() {
        content.push(Line::from(Span::styled(
            "No monthly limits set.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for row in &summary.by_department {
        let spent_ratio = if row.limit_amount > 0.0 {
            row.spent_amount / row.limit_amount
        } else {
            0.0
        };
        let spent_color = if spent_ratio >= 1.0 {
            Color::Red
        } else if spent_ratio >= 0.8 {
            Color::Yellow
        } else {
            Color::Green
        };
        content.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", row.department.name),
                Style::default().fg(Color::White),
            ),
            Span::raw(format!("{:>10.2} limit  ", row.limit_amount)),
            Span::styled(
                format!("{:>10.2} spent", row.spent_amount),
                Style::default().fg(spent_color),
            ),
            Span::styled(
                format!("  {:>10.2} left", row.remaining()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" By department ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn draw_recent_expenses(frame: &mut Frame, area: Rect, summary: &crate::state::DashboardSummary) {
    let mut content = Vec::new();
    if summary.recent_expenses.is_empty() {
        content.push(Line::from(Span::styled(
            "No recent expenses.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for expense in &summary.recent_expenses {
        content.push(Line::from(vec![
            Span::styled(
                expense.date.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{:>10.2}", expense.amount),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(
                "  {} / {} ({})",
                expense.department_name(),
                expense.employee_name(),
                expense.type_name()
            )),
        ]));
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Recent expenses ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}
