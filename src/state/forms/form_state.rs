//! Form state management and form structs

use chrono::{Datelike, Utc};

use super::field::{FormField, SelectOption};
use crate::state::models::{
    CreateEmployee, CreateExpenseType, Department, ExpenseType, SetMonthlyLimit,
    UpdateExpenseType,
};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Login(LoginForm),
    DepartmentCreate(DepartmentCreateForm),
    EmployeeCreate(EmployeeCreateForm),
    ExpenseTypeEdit(ExpenseTypeForm),
    MonthlyLimit(MonthlyLimitForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Login(f) => f.next_field(),
            FormState::DepartmentCreate(f) => f.next_field(),
            FormState::EmployeeCreate(f) => f.next_field(),
            FormState::ExpenseTypeEdit(f) => f.next_field(),
            FormState::MonthlyLimit(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Login(f) => f.prev_field(),
            FormState::DepartmentCreate(f) => f.prev_field(),
            FormState::EmployeeCreate(f) => f.prev_field(),
            FormState::ExpenseTypeEdit(f) => f.prev_field(),
            FormState::MonthlyLimit(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None => None,
            FormState::Login(f) => Some(f.get_active_field_mut()),
            FormState::DepartmentCreate(f) => Some(f.get_active_field_mut()),
            FormState::EmployeeCreate(f) => Some(f.get_active_field_mut()),
            FormState::ExpenseTypeEdit(f) => Some(f.get_active_field_mut()),
            FormState::MonthlyLimit(f) => Some(f.get_active_field_mut()),
        }
    }
}

/// Build the department option list shared by the select-bearing forms
fn department_options(departments: &[Department]) -> Vec<SelectOption> {
    departments
        .iter()
        .map(|d| SelectOption::new(d.id.clone(), d.name.clone()))
        .collect()
}

// Login / Register form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    /// When set, submission registers a new account instead of logging in
    pub register_mode: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            register_mode: false,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.register_mode = !self.register_mode;
    }

    pub fn is_complete(&self) -> bool {
        !self.email.as_text().is_empty() && !self.password.as_text().is_empty()
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
}

// Department Create form
#[derive(Debug, Clone)]
pub struct DepartmentCreateForm {
    pub name: FormField,
    pub active_field_index: usize,
}

impl DepartmentCreateForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            active_field_index: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.as_text().trim().is_empty()
    }
}

impl Default for DepartmentCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for DepartmentCreateForm {
    fn field_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(0);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.name
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            _ => None,
        }
    }
}

// Employee Create form
#[derive(Debug, Clone)]
pub struct EmployeeCreateForm {
    pub name: FormField,
    pub position: FormField,
    pub department: FormField,
    pub active_field_index: usize,
}

impl EmployeeCreateForm {
    pub fn new(departments: &[Department]) -> Self {
        Self {
            name: FormField::text("name", "Name"),
            position: FormField::text("position", "Position"),
            department: FormField::select(
                "department",
                "Department",
                department_options(departments),
            ),
            active_field_index: 0,
        }
    }

    /// The create payload, when every field is filled
    pub fn request(&self) -> Option<CreateEmployee> {
        let department = self.department.selected_id()?;
        let name = self.name.as_text().trim();
        let position = self.position.as_text().trim();
        if name.is_empty() || position.is_empty() {
            return None;
        }
        Some(CreateEmployee {
            name: name.to_string(),
            position: position.to_string(),
            department: department.to_string(),
        })
    }
}

impl Form for EmployeeCreateForm {
    fn field_count(&self) -> usize {
        3
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.position,
            _ => &mut self.department,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.position),
            2 => Some(&self.department),
            _ => None,
        }
    }
}

// Expense Type create/edit form
#[derive(Debug, Clone)]
pub struct ExpenseTypeForm {
    pub name: FormField,
    pub description: FormField,
    pub limit: FormField,
    pub active_field_index: usize,
    /// Present when editing an existing type
    pub editing_id: Option<String>,
}

impl ExpenseTypeForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            description: FormField::text("description", "Description (optional)"),
            limit: FormField::amount("limit", "Per-transaction limit"),
            active_field_index: 0,
            editing_id: None,
        }
    }

    pub fn from_expense_type(expense_type: &ExpenseType) -> Self {
        Self {
            name: FormField::text_with_value("name", "Name", expense_type.name.clone()),
            description: FormField::text_with_value(
                "description",
                "Description (optional)",
                expense_type.description.clone().unwrap_or_default(),
            ),
            limit: FormField::amount_with_value(
                "limit",
                "Per-transaction limit",
                expense_type.limit,
            ),
            active_field_index: 0,
            editing_id: Some(expense_type.id.clone()),
        }
    }

    pub fn create_request(&self) -> Option<CreateExpenseType> {
        let name = self.name.as_text().trim();
        if name.is_empty() || self.limit.as_amount() <= 0.0 {
            return None;
        }
        let description = self.description.as_text().trim();
        Some(CreateExpenseType {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            limit: self.limit.as_amount(),
        })
    }

    pub fn update_request(&self) -> Option<UpdateExpenseType> {
        let create = self.create_request()?;
        Some(UpdateExpenseType {
            name: Some(create.name),
            description: create.description,
            limit: Some(create.limit),
        })
    }
}

impl Default for ExpenseTypeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ExpenseTypeForm {
    fn field_count(&self) -> usize {
        3
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.description,
            _ => &mut self.limit,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.description),
            2 => Some(&self.limit),
            _ => None,
        }
    }
}

// Monthly Limit form
#[derive(Debug, Clone)]
pub struct MonthlyLimitForm {
    pub department: FormField,
    pub year: FormField,
    pub month: FormField,
    pub limit_amount: FormField,
    pub active_field_index: usize,
}

impl MonthlyLimitForm {
    /// Defaults to the current year and month
    pub fn new(departments: &[Department]) -> Self {
        let now = Utc::now();
        Self {
            department: FormField::select(
                "department",
                "Department",
                department_options(departments),
            ),
            year: FormField::integer_with_value("year", "Year", now.year() as i64),
            month: FormField::integer_with_value("month", "Month (1-12)", now.month() as i64),
            limit_amount: FormField::amount("limit_amount", "Limit amount"),
            active_field_index: 0,
        }
    }

    pub fn request(&self) -> Option<SetMonthlyLimit> {
        let department = self.department.selected_id()?;
        let year = self.year.as_integer()? as i32;
        let month = self.month.as_integer()?;
        if !(1..=12).contains(&month) || self.limit_amount.as_amount() <= 0.0 {
            return None;
        }
        Some(SetMonthlyLimit {
            department: department.to_string(),
            year,
            month: month as u32,
            limit_amount: self.limit_amount.as_amount(),
        })
    }
}

impl Form for MonthlyLimitForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.department,
            1 => &mut self.year,
            2 => &mut self.month,
            _ => &mut self.limit_amount,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.department),
            1 => Some(&self.year),
            2 => Some(&self.month),
            3 => Some(&self.limit_amount),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_department(id: &str, name: &str) -> Department {
        Department {
            id: id.to_string(),
            name: name.to_string(),
            number_of_employees: 0,
            created_at: None,
            updated_at: None,
        }
    }

    mod form_state_enum {
        use super::*;

        #[test]
        fn test_default_is_none() {
            let state = FormState::default();
            assert!(matches!(state, FormState::None));
        }

        #[test]
        fn test_next_field_on_none_is_noop() {
            let mut state = FormState::None;
            state.next_field(); // Should not panic
        }

        #[test]
        fn test_get_active_field_mut_none_returns_none() {
            let mut state = FormState::None;
            assert!(state.get_active_field_mut().is_none());
        }

        #[test]
        fn test_next_field_cycles_through_form() {
            let mut state = FormState::Login(LoginForm::new());
            state.next_field();
            if let FormState::Login(ref f) = state {
                assert_eq!(f.active_field_index, 1);
            }
            state.next_field();
            if let FormState::Login(ref f) = state {
                assert_eq!(f.active_field_index, 0); // Wrapped
            }
        }

        #[test]
        fn test_get_active_field_mut_returns_field() {
            let mut state = FormState::Login(LoginForm::new());
            let field = state.get_active_field_mut();
            assert_eq!(field.unwrap().name, "email");
        }
    }

    mod login_form {
        use super::*;

        #[test]
        fn test_incomplete_without_both_fields() {
            let mut form = LoginForm::new();
            assert!(!form.is_complete());
            form.email.push_char('a');
            assert!(!form.is_complete());
            form.password.push_char('b');
            assert!(form.is_complete());
        }

        #[test]
        fn test_toggle_mode() {
            let mut form = LoginForm::new();
            assert!(!form.register_mode);
            form.toggle_mode();
            assert!(form.register_mode);
        }
    }

    mod employee_create_form {
        use super::*;

        #[test]
        fn test_request_requires_every_field() {
            let departments = vec![test_department("dep-1", "Sales")];
            let mut form = EmployeeCreateForm::new(&departments);
            assert!(form.request().is_none());

            for c in "Alice".chars() {
                form.name.push_char(c);
            }
            for c in "Manager".chars() {
                form.position.push_char(c);
            }
            assert!(form.request().is_none());

            form.department.cycle_next();
            let request = form.request().unwrap();
            assert_eq!(request.department, "dep-1");
            assert_eq!(request.name, "Alice");
        }

        #[test]
        fn test_field_navigation() {
            let form_departments = vec![test_department("dep-1", "Sales")];
            let mut form = EmployeeCreateForm::new(&form_departments);
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(2).unwrap().name, "department");
            assert!(form.get_field(3).is_none());
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
        }
    }

    mod expense_type_form {
        use super::*;

        #[test]
        fn test_create_request_requires_name_and_positive_limit() {
            let mut form = ExpenseTypeForm::new();
            assert!(form.create_request().is_none());

            for c in "Travel".chars() {
                form.name.push_char(c);
            }
            assert!(form.create_request().is_none()); // limit still zero

            for c in "80".chars() {
                form.limit.push_char(c);
            }
            let request = form.create_request().unwrap();
            assert_eq!(request.name, "Travel");
            assert_eq!(request.limit, 80.0);
            assert!(request.description.is_none());
        }

        #[test]
        fn test_from_expense_type_loads_values() {
            let expense_type = ExpenseType {
                id: "type-1".to_string(),
                name: "Travel".to_string(),
                description: Some("Flights and hotels".to_string()),
                limit: 80.0,
            };
            let form = ExpenseTypeForm::from_expense_type(&expense_type);
            assert_eq!(form.name.as_text(), "Travel");
            assert_eq!(form.description.as_text(), "Flights and hotels");
            assert_eq!(form.limit.as_amount(), 80.0);
            assert_eq!(form.editing_id.as_deref(), Some("type-1"));

            let update = form.update_request().unwrap();
            assert_eq!(update.limit, Some(80.0));
        }
    }

    mod monthly_limit_form {
        use super::*;

        #[test]
        fn test_defaults_to_current_period() {
            let departments = vec![test_department("dep-1", "Sales")];
            let form = MonthlyLimitForm::new(&departments);
            let now = Utc::now();
            assert_eq!(form.year.as_integer(), Some(now.year() as i64));
            assert_eq!(form.month.as_integer(), Some(now.month() as i64));
        }

        #[test]
        fn test_request_rejects_out_of_range_month() {
            let departments = vec![test_department("dep-1", "Sales")];
            let mut form = MonthlyLimitForm::new(&departments);
            form.department.cycle_next();
            for c in "500".chars() {
                form.limit_amount.push_char(c);
            }
            assert!(form.request().is_some());

            form.month.clear();
            form.month.push_char('1');
            form.month.push_char('3');
            assert!(form.request().is_none());
        }
    }
}
