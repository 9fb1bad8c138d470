//! UI module for rendering the TUI

mod components;
mod dashboard;
mod departments;
mod employees;
mod expense_types;
mod expenses;
mod forms;
mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if !app.state.is_authenticated() {
        let main_area = layout::create_layout_no_sidebar(area);
        login::draw(frame, main_area, app);
        layout::draw_status_bar(frame, app);
        if let Some(error) = app.state.current_error() {
            components::render_error_dialog(frame, error);
        }
        return;
    }

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Login => login::draw(frame, main_area, app),
        View::Dashboard => dashboard::draw(frame, main_area, app),
        View::Departments => departments::draw(frame, main_area, app),
        View::DepartmentCreate => forms::draw_department_create(frame, main_area, app),
        View::Employees => employees::draw(frame, main_area, app),
        View::EmployeeCreate => forms::draw_employee_create(frame, main_area, app),
        View::ExpenseTypes => expense_types::draw(frame, main_area, app),
        View::ExpenseTypeEdit => forms::draw_expense_type_edit(frame, main_area, app),
        View::Expenses => expenses::draw(frame, main_area, app),
        View::ExpenseCreate => forms::draw_expense_create(frame, main_area, app),
        View::MonthlyLimit => forms::draw_monthly_limit(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
