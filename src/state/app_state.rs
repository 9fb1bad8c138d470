//! Application state definitions

use std::collections::VecDeque;

use super::expense_form::ExpenseFormController;
use super::forms::FormState;
use super::models::{
    DashboardSummary, Department, Employee, Expense, ExpenseType, Session,
};

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Departments,
    DepartmentCreate,
    Employees,
    EmployeeCreate,
    ExpenseTypes,
    ExpenseTypeEdit,
    Expenses,
    ExpenseCreate,
    MonthlyLimit,
}

impl View {
    /// Form views are skipped when walking back through history
    pub fn is_form_view(&self) -> bool {
        matches!(
            self,
            View::DepartmentCreate
                | View::EmployeeCreate
                | View::ExpenseTypeEdit
                | View::ExpenseCreate
                | View::MonthlyLimit
        )
    }
}

/// Sort field for the expenses list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseSortField {
    #[default]
    Date,
    Amount,
    Department,
}

impl ExpenseSortField {
    pub fn next(&self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Department,
            Self::Department => Self::Date,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Department => "Department",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Fields of the expense creation view, in navigation order
pub const EXPENSE_FORM_FIELDS: usize = 5;

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Session
    pub session: Option<Session>,

    // Data
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
    pub expense_types: Vec<ExpenseType>,
    pub expenses: Vec<Expense>,
    pub dashboard: Option<DashboardSummary>,

    // Selection
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Sorting
    pub expense_sort_field: ExpenseSortField,
    pub expense_sort_direction: SortDirection,

    // Errors shown as a modal dialog, oldest first
    errors: VecDeque<String>,

    // Simple forms (login, department, employee, expense type, limit)
    pub form: FormState,

    // Expense creation: the budget-aware controller plus its view state
    pub expense_form: ExpenseFormController,
    /// Text buffer backing the amount field; parsed into the controller
    pub amount_input: String,
    /// Active field index in the expense creation view
    /// (0 amount, 1 date, 2 department, 3 employee, 4 expense type)
    pub expense_form_field: usize,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    // ---- Error queue ----

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(|s| s.as_str())
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    // ---- Selection ----

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    // ---- Sorting ----

    /// Cycle expense sort field
    pub fn cycle_expense_sort_field(&mut self) {
        self.expense_sort_field = self.expense_sort_field.next();
        self.reset_selection();
    }

    /// Toggle expense sort direction
    pub fn toggle_expense_sort_direction(&mut self) {
        self.expense_sort_direction = self.expense_sort_direction.toggle();
        self.reset_selection();
    }

    /// Get sorted expenses
    pub fn sorted_expenses(&self) -> Vec<&Expense> {
        let mut expenses: Vec<_> = self.expenses.iter().collect();

        expenses.sort_by(|a, b| {
            let cmp = match self.expense_sort_field {
                ExpenseSortField::Date => a.date.cmp(&b.date),
                ExpenseSortField::Amount => a
                    .amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal),
                ExpenseSortField::Department => a.department_name().cmp(b.department_name()),
            };

            match self.expense_sort_direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });

        expenses
    }

    // ---- Expense form view state ----

    pub fn next_expense_form_field(&mut self) {
        self.expense_form_field = (self.expense_form_field + 1) % EXPENSE_FORM_FIELDS;
    }

    pub fn prev_expense_form_field(&mut self) {
        if self.expense_form_field == 0 {
            self.expense_form_field = EXPENSE_FORM_FIELDS - 1;
        } else {
            self.expense_form_field -= 1;
        }
    }

    /// Reset the expense creation view alongside its controller
    pub fn reset_expense_form_view(&mut self) {
        self.expense_form.reset();
        self.amount_input.clear();
        self.expense_form_field = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn expense(id: &str, amount: f64, day: u32, department: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            date: Utc.with_ymd_and_hms(2026, 2, day, 0, 0, 0).unwrap(),
            expense_type: None,
            employee: None,
            department: Some(Department {
                id: department.to_string(),
                name: department.to_string(),
                number_of_employees: 0,
                created_at: None,
                updated_at: None,
            }),
        }
    }

    #[test]
    fn test_default_view_is_login() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Login);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut state = AppState::default();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down(2);
        assert_eq!(state.selected_index, 1);
        state.move_selection_down(2);
        assert_eq!(state.selected_index, 1);
        state.move_selection_down(0);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn test_sorted_expenses_by_date_desc_by_default() {
        let mut state = AppState::default();
        state.expenses = vec![
            expense("a", 10.0, 1, "Sales"),
            expense("b", 20.0, 3, "Ops"),
            expense("c", 15.0, 2, "Sales"),
        ];
        let ids: Vec<&str> = state.sorted_expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_amount_ascending() {
        let mut state = AppState::default();
        state.expenses = vec![
            expense("a", 10.0, 1, "Sales"),
            expense("b", 20.0, 3, "Ops"),
            expense("c", 15.0, 2, "Sales"),
        ];
        state.expense_sort_field = ExpenseSortField::Amount;
        state.expense_sort_direction = SortDirection::Asc;
        let ids: Vec<&str> = state.sorted_expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_expense_form_field_navigation_wraps() {
        let mut state = AppState::default();
        for _ in 0..EXPENSE_FORM_FIELDS {
            state.next_expense_form_field();
        }
        assert_eq!(state.expense_form_field, 0);
        state.prev_expense_form_field();
        assert_eq!(state.expense_form_field, EXPENSE_FORM_FIELDS - 1);
    }
}
