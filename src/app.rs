//! Application state and core logic

use crate::api::BackendClient;
use crate::state::{
    AppState, Department, DepartmentCreateForm, DepartmentFunds, Employee, EmployeeCreateForm,
    ExpenseType, ExpenseTypeForm, FormState, FundsRequest, LoginForm, MonthlyLimitForm, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Results of background fetches, applied on the event loop
#[derive(Debug)]
pub enum AppEvent {
    DepartmentsLoaded(Result<Vec<Department>, String>),
    EmployeesLoaded(Result<Vec<Employee>, String>),
    ExpenseTypesLoaded(Result<Vec<ExpenseType>, String>),
    FundsLoaded {
        department_id: String,
        generation: u64,
        result: Result<DepartmentFunds, String>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client for REST communication
    api: Arc<dyn BackendClient>,
    /// Receiver side of the background-fetch channel, drained each tick
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status line message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn BackendClient>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            events_rx,
            events_tx,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view.clone());
        self.state.current_view = view;
        self.state.reset_selection();
    }

    /// Go back to the previous non-form view
    pub fn go_back(&mut self) {
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.reset_selection();
            return;
        }
    }

    // =========== Background events ===========

    /// Apply every pending background-fetch result
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Apply one background-fetch result to the expense form controller
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DepartmentsLoaded(result) => {
                if let Ok(departments) = &result {
                    self.state.departments = departments.clone();
                }
                self.state.expense_form.apply_departments(result);
            }
            AppEvent::EmployeesLoaded(result) => {
                if let Ok(employees) = &result {
                    self.state.employees = employees.clone();
                }
                self.state.expense_form.apply_employees(result);
            }
            AppEvent::ExpenseTypesLoaded(result) => {
                if let Ok(types) = &result {
                    self.state.expense_types = types.clone();
                }
                self.state.expense_form.apply_expense_types(result);
            }
            AppEvent::FundsLoaded {
                department_id,
                generation,
                result,
            } => {
                if let Err(error) = &result {
                    tracing::warn!("funds fetch for {department_id} failed: {error}");
                }
                self.state.expense_form.apply_funds_result(generation, result);
            }
        }

        // One dialog for the whole reference-load round, however it failed
        if let Some(message) = self.state.expense_form.take_reference_load_error() {
            self.push_error(message);
        }
    }

    /// Start the three concurrent reference fetches for the expense form
    fn spawn_reference_load(&mut self) {
        self.state.expense_form.begin_reference_load();

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.list_departments().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::DepartmentsLoaded(result));
        });

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.list_employees().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::EmployeesLoaded(result));
        });

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.list_expense_types().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::ExpenseTypesLoaded(result));
        });
    }

    /// Issue the funds lookup the controller asked for
    fn spawn_funds_fetch(&self, request: FundsRequest) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api
                .get_available_funds(&request.department_id)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::FundsLoaded {
                department_id: request.department_id,
                generation: request.generation,
                result,
            });
        });
    }

    // =========== View activation ===========

    /// Open the expense creation form with a fresh draft
    pub fn open_expense_create(&mut self) {
        self.state.reset_expense_form_view();
        self.spawn_reference_load();
        self.navigate(View::ExpenseCreate);
    }

    /// Load the data a section shows, then switch to it
    async fn enter_section(&mut self, view: View) {
        match view {
            View::Dashboard => match self.api.dashboard_summary().await {
                Ok(summary) => self.state.dashboard = Some(summary),
                Err(e) => self.push_error(format!("Failed to load dashboard: {e}")),
            },
            View::Departments => match self.api.list_departments().await {
                Ok(departments) => self.state.departments = departments,
                Err(e) => self.push_error(format!("Failed to load departments: {e}")),
            },
            View::Employees => match self.api.list_employees().await {
                Ok(employees) => self.state.employees = employees,
                Err(e) => self.push_error(format!("Failed to load employees: {e}")),
            },
            View::ExpenseTypes => match self.api.list_expense_types().await {
                Ok(types) => self.state.expense_types = types,
                Err(e) => self.push_error(format!("Failed to load expense types: {e}")),
            },
            View::Expenses => match self.api.list_expenses().await {
                Ok(expenses) => self.state.expenses = expenses,
                Err(e) => self.push_error(format!("Failed to load expenses: {e}")),
            },
            _ => {}
        }
        self.navigate(view);
    }

    // =========== Key handling ===========

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status message on key press
        self.status_message = None;

        // Section switching from any authenticated non-form view
        if self.state.is_authenticated() && !self.state.current_view.is_form_view() {
            match key.code {
                KeyCode::Char('1') => {
                    self.enter_section(View::Dashboard).await;
                    return Ok(());
                }
                KeyCode::Char('2') => {
                    self.enter_section(View::Departments).await;
                    return Ok(());
                }
                KeyCode::Char('3') => {
                    self.enter_section(View::Employees).await;
                    return Ok(());
                }
                KeyCode::Char('4') => {
                    self.enter_section(View::ExpenseTypes).await;
                    return Ok(());
                }
                KeyCode::Char('5') => {
                    self.enter_section(View::Expenses).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.state.current_view {
            View::Login => self.handle_login_key(key).await?,
            View::Dashboard => self.handle_dashboard_key(key).await?,
            View::Departments => self.handle_departments_key(key).await?,
            View::DepartmentCreate => self.handle_department_create_key(key).await?,
            View::Employees => self.handle_employees_key(key).await?,
            View::EmployeeCreate => self.handle_employee_create_key(key).await?,
            View::ExpenseTypes => self.handle_expense_types_key(key).await?,
            View::ExpenseTypeEdit => self.handle_expense_type_edit_key(key).await?,
            View::Expenses => self.handle_expenses_key(key).await?,
            View::ExpenseCreate => self.handle_expense_create_key(key).await?,
            View::MonthlyLimit => self.handle_monthly_limit_key(key).await?,
        }

        Ok(())
    }

    /// Handle keys in the Login view
    async fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        if !matches!(self.state.form, FormState::Login(_)) {
            self.state.form = FormState::Login(LoginForm::new());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let FormState::Login(form) = &mut self.state.form {
                    form.toggle_mode();
                }
            }
            KeyCode::Enter => self.submit_login().await,
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the login (or register) form
    pub async fn submit_login(&mut self) {
        let (email, password, register_mode) = match &self.state.form {
            FormState::Login(form) if form.is_complete() => (
                form.email.as_text().to_string(),
                form.password.as_text().to_string(),
                form.register_mode,
            ),
            _ => return,
        };

        if register_mode {
            match self.api.register(&email, &password).await {
                Ok(registered_email) => {
                    self.status_message =
                        Some(format!("Account {registered_email} created, sign in"));
                    if let FormState::Login(form) = &mut self.state.form {
                        form.register_mode = false;
                        form.password.clear();
                    }
                }
                Err(e) => self.push_error(format!("Registration failed: {e}")),
            }
            return;
        }

        match self.api.login(&email, &password).await {
            Ok(session) => {
                self.status_message = Some(format!("Signed in as {}", session.email));
                self.state.session = Some(session);
                self.state.form = FormState::None;
                self.enter_section(View::Dashboard).await;
                // The login view must not be reachable via Esc
                self.state.view_history.clear();
            }
            Err(e) => self.push_error(format!("Login failed: {e}")),
        }
    }

    /// Drop the session and return to the login view
    fn logout(&mut self) {
        self.api.logout();
        self.state.session = None;
        self.state.dashboard = None;
        self.state.departments.clear();
        self.state.employees.clear();
        self.state.expense_types.clear();
        self.state.expenses.clear();
        self.state.view_history.clear();
        self.state.form = FormState::Login(LoginForm::new());
        self.state.current_view = View::Login;
        self.status_message = Some("Signed out".to_string());
    }

    /// Handle keys in the Dashboard view
    async fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('r') => {
                match self.api.dashboard_summary().await {
                    Ok(summary) => self.state.dashboard = Some(summary),
                    Err(e) => self.push_error(format!("Failed to load dashboard: {e}")),
                }
            }
            KeyCode::Char('x') => self.logout(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Departments view
    async fn handle_departments_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.state.departments.len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                self.state.form = FormState::DepartmentCreate(DepartmentCreateForm::new());
                self.navigate(View::DepartmentCreate);
            }
            KeyCode::Char('l') => {
                self.state.form =
                    FormState::MonthlyLimit(MonthlyLimitForm::new(&self.state.departments));
                self.navigate(View::MonthlyLimit);
            }
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Department Create view
    async fn handle_department_create_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.submit_department_create().await,
            KeyCode::Esc => {
                self.state.form = FormState::None;
                self.go_back();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_department_create(&mut self) {
        let name = match &self.state.form {
            FormState::DepartmentCreate(form) if form.is_complete() => {
                form.name.as_text().trim().to_string()
            }
            _ => return,
        };

        match self.api.create_department(&name).await {
            Ok(_) => {
                if let Ok(departments) = self.api.list_departments().await {
                    self.state.departments = departments;
                }
                self.status_message = Some(format!("Department \"{name}\" created"));
                self.state.form = FormState::None;
                self.go_back();
            }
            Err(e) => self.push_error(format!("Failed to create department: {e}")),
        }
    }

    /// Handle keys in the Employees view
    async fn handle_employees_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.state.employees.len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                // The department select needs the current list
                if self.state.departments.is_empty() {
                    if let Ok(departments) = self.api.list_departments().await {
                        self.state.departments = departments;
                    }
                }
                self.state.form =
                    FormState::EmployeeCreate(EmployeeCreateForm::new(&self.state.departments));
                self.navigate(View::EmployeeCreate);
            }
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Employee Create view
    async fn handle_employee_create_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_next();
                }
            }
            KeyCode::Enter => self.submit_employee_create().await,
            KeyCode::Esc => {
                self.state.form = FormState::None;
                self.go_back();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_employee_create(&mut self) {
        let request = match &self.state.form {
            FormState::EmployeeCreate(form) => match form.request() {
                Some(request) => request,
                None => return,
            },
            _ => return,
        };

        let name = request.name.clone();
        match self.api.create_employee(request).await {
            Ok(_) => {
                if let Ok(employees) = self.api.list_employees().await {
                    self.state.employees = employees;
                }
                self.status_message = Some(format!("Employee \"{name}\" created"));
                self.state.form = FormState::None;
                self.go_back();
            }
            Err(e) => self.push_error(format!("Failed to create employee: {e}")),
        }
    }

    /// Handle keys in the Expense Types view
    async fn handle_expense_types_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state
                    .move_selection_down(self.state.expense_types.len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                self.state.form = FormState::ExpenseTypeEdit(ExpenseTypeForm::new());
                self.navigate(View::ExpenseTypeEdit);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(expense_type) =
                    self.state.expense_types.get(self.state.selected_index)
                {
                    self.state.form = FormState::ExpenseTypeEdit(
                        ExpenseTypeForm::from_expense_type(expense_type),
                    );
                    self.navigate(View::ExpenseTypeEdit);
                }
            }
            KeyCode::Char('d') => self.delete_selected_expense_type().await,
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    async fn delete_selected_expense_type(&mut self) {
        let expense_type = match self.state.expense_types.get(self.state.selected_index) {
            Some(t) => t.clone(),
            None => return,
        };

        match self.api.delete_expense_type(&expense_type.id).await {
            Ok(()) => {
                if let Ok(types) = self.api.list_expense_types().await {
                    self.state.expense_types = types;
                }
                let max = self.state.expense_types.len();
                if self.state.selected_index >= max && max > 0 {
                    self.state.selected_index = max - 1;
                }
                self.status_message =
                    Some(format!("Expense type \"{}\" deleted", expense_type.name));
            }
            Err(e) => self.push_error(format!("Failed to delete expense type: {e}")),
        }
    }

    /// Handle keys in the Expense Type create/edit view
    async fn handle_expense_type_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => self.submit_expense_type_edit().await,
            KeyCode::Esc => {
                self.state.form = FormState::None;
                self.go_back();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_expense_type_edit(&mut self) {
        let form = match &self.state.form {
            FormState::ExpenseTypeEdit(form) => form.clone(),
            _ => return,
        };

        let result = match (&form.editing_id, form.create_request(), form.update_request()) {
            (Some(id), _, Some(update)) => self.api.update_expense_type(id, update).await,
            (None, Some(create), _) => self.api.create_expense_type(create).await,
            _ => return,
        };

        match result {
            Ok(expense_type) => {
                if let Ok(types) = self.api.list_expense_types().await {
                    self.state.expense_types = types;
                }
                let action = if form.editing_id.is_some() {
                    "updated"
                } else {
                    "created"
                };
                self.status_message =
                    Some(format!("Expense type \"{}\" {action}", expense_type.name));
                self.state.form = FormState::None;
                self.go_back();
            }
            Err(e) => self.push_error(format!("Failed to save expense type: {e}")),
        }
    }

    /// Handle keys in the Expenses view
    async fn handle_expenses_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state
                    .move_selection_down(self.state.sorted_expenses().len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('s') => self.state.cycle_expense_sort_field(),
            KeyCode::Char('S') => self.state.toggle_expense_sort_direction(),
            KeyCode::Char('n') => self.open_expense_create(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Expense Create view
    ///
    /// Field order: 0 amount, 1 date, 2 department, 3 employee, 4 type.
    /// Select fields are cycled with Left/Right; every selection change runs
    /// through the controller so the derived state stays consistent.
    async fn handle_expense_create_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_expense_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_expense_form_field(),
            KeyCode::Left => self.cycle_expense_select(false),
            KeyCode::Right => self.cycle_expense_select(true),
            KeyCode::Enter => self.submit_expense().await,
            KeyCode::Esc => {
                self.state.reset_expense_form_view();
                self.go_back();
            }
            KeyCode::Char(c) => self.expense_form_input_char(c),
            KeyCode::Backspace => self.expense_form_backspace(),
            _ => {}
        }
        Ok(())
    }

    fn expense_form_input_char(&mut self, c: char) {
        match self.state.expense_form_field {
            0 => {
                let input = &mut self.state.amount_input;
                if c.is_ascii_digit() || (c == '.' && !input.contains('.')) {
                    input.push(c);
                    let amount = input.parse().unwrap_or(0.0);
                    self.state.expense_form.set_amount(amount);
                }
            }
            1 => {
                let mut date = self.state.expense_form.date().to_string();
                date.push(c);
                self.state.expense_form.set_date(date);
            }
            _ => {}
        }
    }

    fn expense_form_backspace(&mut self) {
        match self.state.expense_form_field {
            0 => {
                self.state.amount_input.pop();
                let amount = self.state.amount_input.parse().unwrap_or(0.0);
                self.state.expense_form.set_amount(amount);
            }
            1 => {
                let mut date = self.state.expense_form.date().to_string();
                date.pop();
                self.state.expense_form.set_date(date);
            }
            _ => {}
        }
    }

    /// Cycle the active select field of the expense form
    fn cycle_expense_select(&mut self, forward: bool) {
        let request = match self.state.expense_form_field {
            2 => {
                let ids: Vec<String> = self
                    .state
                    .expense_form
                    .departments()
                    .iter()
                    .map(|d| d.id.clone())
                    .collect();
                let next =
                    next_option(self.state.expense_form.department_id(), &ids, forward);
                self.state.expense_form.set_department(&next)
            }
            3 => {
                let ids: Vec<String> = self
                    .state
                    .expense_form
                    .filtered_employees()
                    .iter()
                    .map(|e| e.id.clone())
                    .collect();
                let next = next_option(self.state.expense_form.employee_id(), &ids, forward);
                self.state.expense_form.set_employee(&next)
            }
            4 => {
                let ids: Vec<String> = self
                    .state
                    .expense_form
                    .expense_types()
                    .iter()
                    .map(|t| t.id.clone())
                    .collect();
                let next =
                    next_option(self.state.expense_form.expense_type_id(), &ids, forward);
                self.state.expense_form.set_expense_type(&next);
                None
            }
            _ => None,
        };

        if let Some(request) = request {
            self.spawn_funds_fetch(request);
        }
    }

    /// Submit the expense draft; exactly one create call per confirmation
    pub async fn submit_expense(&mut self) {
        let draft = match self.state.expense_form.draft() {
            Some(draft) => draft,
            None => return,
        };

        match self.api.create_expense(draft).await {
            Ok(_) => {
                self.status_message = Some("Expense created".to_string());
                self.state.reset_expense_form_view();
            }
            Err(e) => {
                // Draft is preserved for correction
                self.push_error(format!("Failed to create expense: {e}"));
            }
        }
    }

    /// Handle keys in the Monthly Limit view
    async fn handle_monthly_limit_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_prev();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.cycle_next();
                }
            }
            KeyCode::Enter => self.submit_monthly_limit().await,
            KeyCode::Esc => {
                self.state.form = FormState::None;
                self.go_back();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_monthly_limit(&mut self) {
        let request = match &self.state.form {
            FormState::MonthlyLimit(form) => match form.request() {
                Some(request) => request,
                None => return,
            },
            _ => return,
        };

        match self.api.set_monthly_limit(request).await {
            Ok(limit) => {
                self.status_message = Some(format!(
                    "Monthly limit set: {:.2} for {}/{}",
                    limit.limit_amount, limit.month, limit.year
                ));
                self.state.form = FormState::None;
                self.go_back();
            }
            Err(e) => self.push_error(format!("Failed to set monthly limit: {e}")),
        }
    }
}

/// Step through `"" -> ids[0] -> ids[1] -> ... -> ""` in either direction
fn next_option(current: &str, ids: &[String], forward: bool) -> String {
    if ids.is_empty() {
        return String::new();
    }
    // Position 0 is the empty (unselected) option
    let position = ids
        .iter()
        .position(|id| id == current)
        .map(|i| i + 1)
        .unwrap_or(0);
    let count = ids.len() + 1;
    let next = if forward {
        (position + 1) % count
    } else {
        (position + count - 1) % count
    };
    if next == 0 {
        String::new()
    } else {
        ids[next - 1].clone()
    }
}
