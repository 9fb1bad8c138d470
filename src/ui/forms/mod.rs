//! Form rendering

mod expense_form;
mod field_renderer;

pub use expense_form::draw_expense_create;
pub use field_renderer::{draw_field, draw_field_with_value};

use crate::app::App;
use crate::state::{Form, FormField, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the department create form
pub fn draw_department_create(frame: &mut Frame, area: Rect, app: &App) {
    if let FormState::DepartmentCreate(form) = &app.state.form {
        let fields = [(&form.name, form.active_field() == 0)];
        draw_simple_form(frame, area, " New department ", &fields);
    }
}

/// Draw the employee create form
pub fn draw_employee_create(frame: &mut Frame, area: Rect, app: &App) {
    if let FormState::EmployeeCreate(form) = &app.state.form {
        let active = form.active_field();
        let fields = [
            (&form.name, active == 0),
            (&form.position, active == 1),
            (&form.department, active == 2),
        ];
        draw_simple_form(frame, area, " New employee ", &fields);
    }
}

/// Draw the expense type create/edit form
pub fn draw_expense_type_edit(frame: &mut Frame, area: Rect, app: &App) {
    if let FormState::ExpenseTypeEdit(form) = &app.state.form {
        let active = form.active_field();
        let fields = [
            (&form.name, active == 0),
            (&form.description, active == 1),
            (&form.limit, active == 2),
        ];
        let title = if form.editing_id.is_some() {
            " Edit expense type "
        } else {
            " New expense type "
        };
        draw_simple_form(frame, area, title, &fields);
    }
}

/// Draw the monthly limit form
pub fn draw_monthly_limit(frame: &mut Frame, area: Rect, app: &App) {
    if let FormState::MonthlyLimit(form) = &app.state.form {
        let active = form.active_field();
        let fields = [
            (&form.department, active == 0),
            (&form.year, active == 1),
            (&form.month, active == 2),
            (&form.limit_amount, active == 3),
        ];
        draw_simple_form(frame, area, " Set monthly limit ", &fields);
    }
}

/// Shared layout for the small forms: one bordered field per row plus hints
fn draw_simple_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[(&FormField, bool)],
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, (field, is_active)) in fields.iter().enumerate() {
        draw_field(frame, chunks[idx], field, *is_active);
    }

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(
            " save | Tab next | ◂ ▸ cycle select | Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(hints, chunks[fields.len() + 1]);
}
