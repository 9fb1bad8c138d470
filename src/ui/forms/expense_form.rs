//! Expense creation view: draft fields plus the live budget panel

use super::field_renderer::draw_field_with_value;
use crate::app::App;
use crate::state::ExpenseFormController;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the expense creation form
pub fn draw_expense_create(frame: &mut Frame, area: Rect, app: &App) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(area);

    draw_fields(frame, h_chunks[0], app);
    draw_budget_panel(frame, h_chunks[1], app);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.expense_form;
    let active = app.state.expense_form_field;

    let block = Block::default()
        .title(" New expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Amount
            Constraint::Length(1), // Validation message
            Constraint::Length(3), // Date
            Constraint::Length(3), // Department
            Constraint::Length(3), // Employee
            Constraint::Length(3), // Expense type
            Constraint::Length(1),
            Constraint::Min(0), // Hints
        ])
        .split(inner);

    draw_field_with_value(
        frame,
        chunks[0],
        "Amount",
        &app.state.amount_input,
        active == 0,
        false,
    );

    if let Some(message) = form.validation_message() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red),
            )),
            chunks[1],
        );
    }

    draw_field_with_value(frame, chunks[2], "Date", form.date(), active == 1, false);

    draw_field_with_value(
        frame,
        chunks[3],
        "Department",
        &department_label(form),
        active == 2,
        true,
    );
    draw_field_with_value(
        frame,
        chunks[4],
        "Employee",
        &employee_label(form),
        active == 3,
        true,
    );
    draw_field_with_value(
        frame,
        chunks[5],
        "Expense type",
        &expense_type_label(form),
        active == 4,
        true,
    );

    let submit_style = if form.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Enter submit", submit_style),
        Span::styled(
            " | Tab next | ◂ ▸ cycle select | Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(hints, chunks[7]);
}

fn department_label(form: &ExpenseFormController) -> String {
    form.departments()
        .iter()
        .find(|d| d.id == form.department_id())
        .map(|d| d.name.clone())
        .unwrap_or_default()
}

fn employee_label(form: &ExpenseFormController) -> String {
    form.filtered_employees()
        .iter()
        .find(|e| e.id == form.employee_id())
        .map(|e| e.name.clone())
        .unwrap_or_default()
}

fn expense_type_label(form: &ExpenseFormController) -> String {
    form.selected_expense_type()
        .map(|t| t.name.clone())
        .unwrap_or_default()
}

/// Budget panel: the funds snapshot, the type limit, and the resulting cap
fn draw_budget_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.expense_form;
    let mut content = vec![Line::from("")];

    if form.is_initial_data_loading() {
        content.push(Line::from(Span::styled(
            " Loading form data…",
            Style::default().fg(Color::Yellow),
        )));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        " Department funds",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    if form.is_funds_loading() {
        content.push(Line::from(Span::styled(
            "   loading…",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(funds) = form.funds() {
        let rows = [
            ("limit", funds.limit_amount),
            ("carryover", funds.carryover),
            ("effective", funds.effective_limit),
            ("spent", funds.spent_amount),
        ];
        for (label, value) in rows {
            content.push(Line::from(vec![
                Span::styled(format!("   {label:<10}"), Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{value:>12.2}")),
            ]));
        }
        let available_color = if funds.available > 0.0 {
            Color::Green
        } else {
            Color::Red
        };
        content.push(Line::from(vec![
            Span::styled("   available ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:>12.2}", funds.available),
                Style::default().fg(available_color).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        content.push(Line::from(Span::styled(
            "   select a department",
            Style::default().fg(Color::DarkGray),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        " Type limit",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    match form.selected_expense_type() {
        Some(expense_type) => content.push(Line::from(Span::raw(format!(
            "   {:>12.2} per expense",
            expense_type.limit
        )))),
        None => content.push(Line::from(Span::styled(
            "   select a type",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    content.push(Line::from(""));
    match form.max_allowed_amount() {
        Some(max_allowed) => {
            content.push(Line::from(vec![
                Span::styled(" Max allowed ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{max_allowed:>10.2}"),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        None => {
            content.push(Line::from(Span::styled(
                " Max allowed: unknown",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Budget ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}
