//! Budget-aware expense creation form controller
//!
//! Owns the draft of a new expense and keeps its derived state consistent:
//! the employee list filtered by department, the department funds snapshot,
//! the selected expense type, and the amount validation that follows from
//! them. Everything is recomputed explicitly inside the mutating methods;
//! there is no hidden dependency tracking, which keeps the update order
//! testable without any UI attached.
//!
//! Remote work is not performed here. When a department selection requires a
//! funds lookup, the controller hands back a [`FundsRequest`] stamped with a
//! generation counter; the app layer performs the fetch and feeds the result
//! to [`ExpenseFormController::apply_funds_result`]. A response whose
//! generation no longer matches is dropped, so a slow response for a
//! superseded selection can never overwrite the snapshot of a newer one.

use chrono::{DateTime, NaiveDate, Utc};

use super::models::{CreateExpense, Department, DepartmentFunds, Employee, ExpenseType};

/// A funds lookup the app layer must issue on the controller's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundsRequest {
    pub department_id: String,
    /// Matched against the controller's current generation when the
    /// response is applied; stale responses are discarded.
    pub generation: u64,
}

/// Which ceiling the entered amount violates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountViolation {
    /// The computed maximum is exactly zero
    NoFundsAvailable,
    /// The department's available funds are the binding constraint
    DepartmentAvailable(f64),
    /// The expense type's per-transaction limit is the binding constraint
    TypeLimit(f64),
}

impl AmountViolation {
    pub fn message(&self) -> String {
        match self {
            Self::NoFundsAvailable => "No funds available for this department".to_string(),
            Self::DepartmentAvailable(available) => {
                format!("Exceeds the department's available funds ({available:.2})")
            }
            Self::TypeLimit(limit) => {
                format!("Exceeds the per-transaction limit for this expense type ({limit:.2})")
            }
        }
    }
}

/// Controller for the expense creation form
///
/// Field selections use the empty string for "nothing selected", matching
/// the select widgets that drive them.
pub struct ExpenseFormController {
    // Draft fields
    amount: f64,
    date: String,
    department_id: String,
    employee_id: String,
    expense_type_id: String,

    // Reference caches, loaded once per form activation
    departments: Vec<Department>,
    employees: Vec<Employee>,
    expense_types: Vec<ExpenseType>,

    // Derived state
    filtered_employees: Vec<Employee>,
    funds: Option<DepartmentFunds>,
    selected_type: Option<ExpenseType>,
    funds_loading: bool,
    funds_generation: u64,
    amount_violation: Option<AmountViolation>,

    // Initialization protocol
    pending_reference_loads: u8,
    failed_reference_loads: Vec<&'static str>,
}

impl ExpenseFormController {
    pub fn new() -> Self {
        Self {
            amount: 0.0,
            date: Utc::now().to_rfc3339(),
            department_id: String::new(),
            employee_id: String::new(),
            expense_type_id: String::new(),
            departments: Vec::new(),
            employees: Vec::new(),
            expense_types: Vec::new(),
            filtered_employees: Vec::new(),
            funds: None,
            selected_type: None,
            funds_loading: false,
            funds_generation: 0,
            amount_violation: None,
            pending_reference_loads: 0,
            failed_reference_loads: Vec::new(),
        }
    }

    // ---- Initialization protocol ----

    /// Mark the three reference fetches as outstanding
    pub fn begin_reference_load(&mut self) {
        self.pending_reference_loads = 3;
        self.failed_reference_loads.clear();
    }

    /// Submission stays blocked while any reference fetch is outstanding
    pub fn is_initial_data_loading(&self) -> bool {
        self.pending_reference_loads > 0
    }

    pub fn apply_departments(&mut self, result: Result<Vec<Department>, String>) {
        match result {
            Ok(departments) => self.departments = departments,
            Err(_) => self.failed_reference_loads.push("departments"),
        }
        self.resolve_reference_load();
    }

    pub fn apply_employees(&mut self, result: Result<Vec<Employee>, String>) {
        match result {
            Ok(employees) => {
                self.employees = employees;
                // Refilter against the current department and drop a
                // selection that is no longer listed.
                self.refilter_employees();
            }
            Err(_) => self.failed_reference_loads.push("employees"),
        }
        self.resolve_reference_load();
    }

    pub fn apply_expense_types(&mut self, result: Result<Vec<ExpenseType>, String>) {
        match result {
            Ok(types) => {
                self.expense_types = types;
                self.refresh_selected_type();
                self.revalidate_amount();
            }
            Err(_) => self.failed_reference_loads.push("expense types"),
        }
        self.resolve_reference_load();
    }

    fn resolve_reference_load(&mut self) {
        self.pending_reference_loads = self.pending_reference_loads.saturating_sub(1);
    }

    /// One combined error for the whole load round, surfaced at most once
    ///
    /// Returns `None` until all three fetches have resolved; after the
    /// message is taken the failures are forgotten (best-effort loaded).
    pub fn take_reference_load_error(&mut self) -> Option<String> {
        if self.pending_reference_loads > 0 || self.failed_reference_loads.is_empty() {
            return None;
        }
        let failed = self.failed_reference_loads.join(", ");
        self.failed_reference_loads.clear();
        Some(format!("Failed to load form data: {failed}"))
    }

    // ---- Field mutation ----

    /// Select a department (empty string clears the selection)
    ///
    /// Returns the funds lookup to issue, if one is needed.
    pub fn set_department(&mut self, department_id: &str) -> Option<FundsRequest> {
        if department_id == self.department_id {
            // Unchanged selection: no refilter, no second funds request
            return None;
        }
        self.change_department(department_id)
    }

    fn change_department(&mut self, department_id: &str) -> Option<FundsRequest> {
        self.department_id = department_id.to_string();
        self.refilter_employees();

        // Invalidate the old snapshot either way; the generation bump makes
        // any in-flight response for the previous selection stale.
        self.funds = None;
        self.funds_generation += 1;

        let request = if self.department_id.is_empty() {
            self.funds_loading = false;
            None
        } else {
            self.funds_loading = true;
            Some(FundsRequest {
                department_id: self.department_id.clone(),
                generation: self.funds_generation,
            })
        };

        self.revalidate_amount();
        request
    }

    /// Select an employee (empty string clears the selection)
    ///
    /// Selecting an employee from another department switches the department
    /// field to theirs, which may in turn require a funds lookup.
    pub fn set_employee(&mut self, employee_id: &str) -> Option<FundsRequest> {
        if employee_id == self.employee_id {
            return None;
        }
        self.employee_id = employee_id.to_string();

        if self.employee_id.is_empty() {
            return None;
        }

        let owning_department = self
            .employees
            .iter()
            .find(|e| e.id == self.employee_id)
            .map(|e| e.department.id.clone());

        // Only switch when it actually differs, so this cannot ping-pong
        // with the employee refiltering above.
        match owning_department {
            Some(department_id) if department_id != self.department_id => {
                self.change_department(&department_id)
            }
            _ => None,
        }
    }

    /// Select an expense type (empty string clears the selection)
    pub fn set_expense_type(&mut self, expense_type_id: &str) {
        if expense_type_id == self.expense_type_id {
            return;
        }
        self.expense_type_id = expense_type_id.to_string();
        self.refresh_selected_type();
        self.revalidate_amount();
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.revalidate_amount();
    }

    pub fn set_date(&mut self, date: String) {
        self.date = date;
    }

    /// Store a funds response, unless the selection has moved on
    pub fn apply_funds_result(
        &mut self,
        generation: u64,
        result: Result<DepartmentFunds, String>,
    ) {
        if generation != self.funds_generation {
            // Response for a superseded department selection
            return;
        }
        self.funds_loading = false;
        self.funds = result.ok();
        self.revalidate_amount();
    }

    // ---- Derived state ----

    fn refilter_employees(&mut self) {
        self.filtered_employees = if self.department_id.is_empty() {
            self.employees.clone()
        } else {
            self.employees
                .iter()
                .filter(|e| e.department.id == self.department_id)
                .cloned()
                .collect()
        };
        if !self.employee_id.is_empty()
            && !self
                .filtered_employees
                .iter()
                .any(|e| e.id == self.employee_id)
        {
            self.employee_id.clear();
        }
    }

    fn refresh_selected_type(&mut self) {
        self.selected_type = self
            .expense_types
            .iter()
            .find(|t| t.id == self.expense_type_id)
            .cloned();
    }

    /// `min(available, type limit)`, known only when both snapshots are
    pub fn max_allowed_amount(&self) -> Option<f64> {
        let funds = self.funds.as_ref()?;
        let expense_type = self.selected_type.as_ref()?;
        Some(funds.available.min(expense_type.limit))
    }

    fn revalidate_amount(&mut self) {
        self.amount_violation = self.compute_amount_violation();
    }

    fn compute_amount_violation(&self) -> Option<AmountViolation> {
        if self.amount <= 0.0 {
            // Positivity is a presence concern; budget checks apply only to
            // a meaningful amount.
            return None;
        }
        // While either snapshot is missing the maximum is unknown, not zero
        let max_allowed = self.max_allowed_amount()?;
        if self.amount <= max_allowed {
            return None;
        }
        if max_allowed == 0.0 {
            return Some(AmountViolation::NoFundsAvailable);
        }
        let funds = self.funds.as_ref()?;
        if self.amount > funds.available {
            // Department availability wins when both ceilings are violated
            return Some(AmountViolation::DepartmentAvailable(funds.available));
        }
        let expense_type = self.selected_type.as_ref()?;
        Some(AmountViolation::TypeLimit(expense_type.limit))
    }

    pub fn amount_violation(&self) -> Option<&AmountViolation> {
        self.amount_violation.as_ref()
    }

    pub fn validation_message(&self) -> Option<String> {
        self.amount_violation.as_ref().map(|v| v.message())
    }

    /// Normalized RFC 3339 form of the date field, if it parses
    ///
    /// Accepts a full timestamp or a bare `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<String> {
        let text = self.date.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc).to_rfc3339());
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().to_rfc3339())
    }

    // ---- Submission ----

    pub fn can_submit(&self) -> bool {
        !self.is_initial_data_loading()
            && self.amount > 0.0
            && self.parsed_date().is_some()
            && !self.department_id.is_empty()
            && !self.employee_id.is_empty()
            && !self.expense_type_id.is_empty()
            && self.amount_violation.is_none()
    }

    /// The create payload for the current draft, when it may be submitted
    pub fn draft(&self) -> Option<CreateExpense> {
        if !self.can_submit() {
            return None;
        }
        Some(CreateExpense {
            amount: self.amount,
            date: self.parsed_date()?,
            expense_type: self.expense_type_id.clone(),
            employee: self.employee_id.clone(),
            department: self.department_id.clone(),
        })
    }

    /// Return every field to its default after a successful submission
    pub fn reset(&mut self) {
        self.amount = 0.0;
        self.date = Utc::now().to_rfc3339();
        self.department_id.clear();
        self.employee_id.clear();
        self.expense_type_id.clear();
        self.funds = None;
        self.selected_type = None;
        self.funds_loading = false;
        self.funds_generation += 1;
        self.amount_violation = None;
        self.refilter_employees();
    }

    // ---- Accessors for rendering ----

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn department_id(&self) -> &str {
        &self.department_id
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn expense_type_id(&self) -> &str {
        &self.expense_type_id
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn expense_types(&self) -> &[ExpenseType] {
        &self.expense_types
    }

    pub fn filtered_employees(&self) -> &[Employee] {
        &self.filtered_employees
    }

    pub fn funds(&self) -> Option<&DepartmentFunds> {
        self.funds.as_ref()
    }

    pub fn selected_expense_type(&self) -> Option<&ExpenseType> {
        self.selected_type.as_ref()
    }

    pub fn is_funds_loading(&self) -> bool {
        self.funds_loading
    }
}

impl Default for ExpenseFormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn department(id: &str, name: &str) -> Department {
        Department {
            id: id.to_string(),
            name: name.to_string(),
            number_of_employees: 0,
            created_at: None,
            updated_at: None,
        }
    }

    fn employee(id: &str, name: &str, department_id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            position: "Manager".to_string(),
            department: department(department_id, department_id),
            updated_at: None,
        }
    }

    fn expense_type(id: &str, name: &str, limit: f64) -> ExpenseType {
        ExpenseType {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            limit,
        }
    }

    fn funds(available: f64) -> DepartmentFunds {
        DepartmentFunds {
            limit_amount: available,
            spent_amount: 0.0,
            carryover: 0.0,
            effective_limit: available,
            available,
        }
    }

    /// Controller with reference data already loaded: two departments, three
    /// employees (two in sales, one in marketing), one expense type.
    fn loaded_controller() -> ExpenseFormController {
        let mut form = ExpenseFormController::new();
        form.begin_reference_load();
        form.apply_departments(Ok(vec![
            department("sales", "Sales"),
            department("marketing", "Marketing"),
        ]));
        form.apply_employees(Ok(vec![
            employee("alice", "Alice", "sales"),
            employee("bob", "Bob", "sales"),
            employee("carol", "Carol", "marketing"),
        ]));
        form.apply_expense_types(Ok(vec![expense_type("travel", "Travel", 80.0)]));
        form
    }

    mod reference_loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_loading_until_all_three_resolve() {
            let mut form = ExpenseFormController::new();
            assert!(!form.is_initial_data_loading());

            form.begin_reference_load();
            assert!(form.is_initial_data_loading());

            form.apply_departments(Ok(vec![]));
            assert!(form.is_initial_data_loading());
            form.apply_employees(Ok(vec![]));
            assert!(form.is_initial_data_loading());
            form.apply_expense_types(Ok(vec![]));
            assert!(!form.is_initial_data_loading());
        }

        #[test]
        fn test_failed_load_still_clears_flag() {
            let mut form = ExpenseFormController::new();
            form.begin_reference_load();
            form.apply_departments(Err("boom".to_string()));
            form.apply_employees(Ok(vec![]));
            form.apply_expense_types(Ok(vec![]));
            assert!(!form.is_initial_data_loading());
        }

        #[test]
        fn test_single_error_for_the_round() {
            let mut form = ExpenseFormController::new();
            form.begin_reference_load();
            form.apply_departments(Err("boom".to_string()));
            // Not surfaced while the other fetches are outstanding
            assert_eq!(form.take_reference_load_error(), None);
            form.apply_employees(Err("boom".to_string()));
            form.apply_expense_types(Ok(vec![]));

            let message = form.take_reference_load_error().unwrap();
            assert_eq!(message, "Failed to load form data: departments, employees");
            // Taken once, never repeated
            assert_eq!(form.take_reference_load_error(), None);
        }

        #[test]
        fn test_no_error_when_all_succeed() {
            let mut form = loaded_controller();
            assert_eq!(form.take_reference_load_error(), None);
        }
    }

    mod employee_filtering {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_no_department_lists_everyone() {
            let form = loaded_controller();
            assert_eq!(form.filtered_employees().len(), 3);
        }

        #[test]
        fn test_department_filters_to_its_employees() {
            let mut form = loaded_controller();
            form.set_department("sales");
            let names: Vec<&str> = form
                .filtered_employees()
                .iter()
                .map(|e| e.name.as_str())
                .collect();
            assert_eq!(names, vec!["Alice", "Bob"]);
        }

        #[test]
        fn test_clearing_department_restores_everyone() {
            let mut form = loaded_controller();
            form.set_department("sales");
            form.set_department("");
            assert_eq!(form.filtered_employees().len(), 3);
        }

        #[test]
        fn test_employee_outside_new_department_is_cleared() {
            let mut form = loaded_controller();
            form.set_department("sales");
            form.set_employee("alice");
            form.set_department("marketing");
            assert_eq!(form.employee_id(), "");
        }

        #[test]
        fn test_employee_inside_new_department_is_kept() {
            let mut form = loaded_controller();
            form.set_employee("alice");
            form.set_department("sales");
            assert_eq!(form.employee_id(), "alice");
        }
    }

    mod department_autofill {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selecting_employee_fills_their_department() {
            let mut form = loaded_controller();
            let request = form.set_employee("alice");

            assert_eq!(form.department_id(), "sales");
            // Scenario D: the auto-fill also triggers the funds lookup
            let request = request.expect("funds request for auto-filled department");
            assert_eq!(request.department_id, "sales");
            assert!(form.is_funds_loading());
        }

        #[test]
        fn test_same_department_employee_does_not_refetch() {
            let mut form = loaded_controller();
            form.set_department("sales");
            let request = form.set_employee("bob");
            assert!(request.is_none());
            assert_eq!(form.department_id(), "sales");
        }

        #[test]
        fn test_switching_employee_switches_department() {
            let mut form = loaded_controller();
            form.set_employee("alice");
            let request = form.set_employee("carol");
            assert_eq!(form.department_id(), "marketing");
            assert_eq!(request.unwrap().department_id, "marketing");
            assert_eq!(form.employee_id(), "carol");
        }

        #[test]
        fn test_clearing_employee_keeps_department() {
            let mut form = loaded_controller();
            form.set_employee("alice");
            let request = form.set_employee("");
            assert!(request.is_none());
            assert_eq!(form.department_id(), "sales");
        }
    }

    mod funds_fetch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_selection_requests_funds_and_sets_loading() {
            let mut form = loaded_controller();
            let request = form.set_department("sales").unwrap();
            assert_eq!(request.department_id, "sales");
            assert!(form.is_funds_loading());
            assert!(form.funds().is_none());
        }

        #[test]
        fn test_reselecting_same_department_is_a_noop() {
            let mut form = loaded_controller();
            let first = form.set_department("sales");
            assert!(first.is_some());
            let second = form.set_department("sales");
            assert!(second.is_none());
        }

        #[test]
        fn test_response_is_stored_for_current_generation() {
            let mut form = loaded_controller();
            let request = form.set_department("sales").unwrap();
            form.apply_funds_result(request.generation, Ok(funds(100.0)));
            assert!(!form.is_funds_loading());
            assert_eq!(form.funds().unwrap().available, 100.0);
        }

        #[test]
        fn test_failure_clears_loading_without_snapshot() {
            let mut form = loaded_controller();
            let request = form.set_department("sales").unwrap();
            form.apply_funds_result(request.generation, Err("timeout".to_string()));
            assert!(!form.is_funds_loading());
            assert!(form.funds().is_none());
        }

        #[test]
        fn test_stale_response_is_discarded() {
            // Scenario E: Sales then Marketing before Sales' funds arrive
            let mut form = loaded_controller();
            let sales = form.set_department("sales").unwrap();
            let marketing = form.set_department("marketing").unwrap();

            form.apply_funds_result(sales.generation, Ok(funds(999.0)));
            assert!(form.funds().is_none(), "late Sales response must not land");
            assert!(form.is_funds_loading());

            form.apply_funds_result(marketing.generation, Ok(funds(50.0)));
            assert_eq!(form.funds().unwrap().available, 50.0);
        }

        #[test]
        fn test_clearing_department_drops_in_flight_response() {
            let mut form = loaded_controller();
            let request = form.set_department("sales").unwrap();
            form.set_department("");
            assert!(!form.is_funds_loading());

            form.apply_funds_result(request.generation, Ok(funds(100.0)));
            assert!(form.funds().is_none());
        }
    }

    mod amount_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        fn form_with(available: f64, limit: f64) -> ExpenseFormController {
            let mut form = ExpenseFormController::new();
            form.begin_reference_load();
            form.apply_departments(Ok(vec![department("sales", "Sales")]));
            form.apply_employees(Ok(vec![employee("alice", "Alice", "sales")]));
            form.apply_expense_types(Ok(vec![expense_type("travel", "Travel", limit)]));
            let request = form.set_department("sales").unwrap();
            form.apply_funds_result(request.generation, Ok(funds(available)));
            form.set_expense_type("travel");
            form
        }

        #[test]
        fn test_max_is_min_of_available_and_limit() {
            let form = form_with(100.0, 80.0);
            assert_eq!(form.max_allowed_amount(), Some(80.0));

            let form = form_with(50.0, 80.0);
            assert_eq!(form.max_allowed_amount(), Some(50.0));
        }

        #[test]
        fn test_unknown_max_never_fails_validation() {
            let mut form = loaded_controller();
            form.set_expense_type("travel");
            form.set_amount(1_000_000.0);
            // No funds snapshot yet: maximum unknown, amount accepted
            assert_eq!(form.max_allowed_amount(), None);
            assert!(form.amount_violation().is_none());

            let request = form.set_department("sales").unwrap();
            form.set_amount(1_000_000.0);
            assert!(form.amount_violation().is_none());

            // The snapshot arriving re-runs validation without the amount
            // being retouched
            form.apply_funds_result(request.generation, Ok(funds(10.0)));
            assert!(form.amount_violation().is_some());
        }

        #[test]
        fn test_type_limit_message_when_type_is_binding() {
            // Scenario A: available=100, limit=80, amount=90
            let mut form = form_with(100.0, 80.0);
            form.set_amount(90.0);
            assert_eq!(
                form.amount_violation(),
                Some(&AmountViolation::TypeLimit(80.0))
            );
            assert_eq!(
                form.validation_message().unwrap(),
                "Exceeds the per-transaction limit for this expense type (80.00)"
            );
        }

        #[test]
        fn test_department_message_when_availability_is_binding() {
            // Scenario B: available=50, limit=80, amount=60
            let mut form = form_with(50.0, 80.0);
            form.set_amount(60.0);
            assert_eq!(
                form.amount_violation(),
                Some(&AmountViolation::DepartmentAvailable(50.0))
            );
            assert_eq!(
                form.validation_message().unwrap(),
                "Exceeds the department's available funds (50.00)"
            );
        }

        #[test]
        fn test_no_funds_message_when_max_is_zero() {
            // Scenario C: available=0 rejects any positive amount
            let mut form = form_with(0.0, 80.0);
            form.set_amount(0.01);
            assert_eq!(
                form.amount_violation(),
                Some(&AmountViolation::NoFundsAvailable)
            );
        }

        #[test]
        fn test_department_wins_when_both_are_violated() {
            let mut form = form_with(50.0, 80.0);
            form.set_amount(90.0);
            assert_eq!(
                form.amount_violation(),
                Some(&AmountViolation::DepartmentAvailable(50.0))
            );
        }

        #[test]
        fn test_amount_within_max_passes() {
            let mut form = form_with(100.0, 80.0);
            form.set_amount(80.0);
            assert!(form.amount_violation().is_none());
        }

        #[test]
        fn test_zero_amount_is_not_a_budget_violation() {
            let mut form = form_with(0.0, 80.0);
            form.set_amount(0.0);
            assert!(form.amount_violation().is_none());
        }

        #[test]
        fn test_changing_type_revalidates_without_retouching_amount() {
            let mut form = ExpenseFormController::new();
            form.begin_reference_load();
            form.apply_departments(Ok(vec![department("sales", "Sales")]));
            form.apply_employees(Ok(vec![employee("alice", "Alice", "sales")]));
            form.apply_expense_types(Ok(vec![
                expense_type("travel", "Travel", 80.0),
                expense_type("office", "Office", 30.0),
            ]));
            let request = form.set_department("sales").unwrap();
            form.apply_funds_result(request.generation, Ok(funds(100.0)));

            form.set_expense_type("travel");
            form.set_amount(60.0);
            assert!(form.amount_violation().is_none());

            form.set_expense_type("office");
            assert_eq!(
                form.amount_violation(),
                Some(&AmountViolation::TypeLimit(30.0))
            );
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        fn valid_form() -> ExpenseFormController {
            let mut form = loaded_controller();
            let request = form.set_department("sales").unwrap();
            form.apply_funds_result(request.generation, Ok(funds(100.0)));
            form.set_employee("alice");
            form.set_expense_type("travel");
            form.set_amount(40.0);
            form
        }

        #[test]
        fn test_complete_draft_can_submit() {
            let form = valid_form();
            assert!(form.can_submit());
            let draft = form.draft().unwrap();
            assert_eq!(draft.department, "sales");
            assert_eq!(draft.employee, "alice");
            assert_eq!(draft.expense_type, "travel");
            assert_eq!(draft.amount, 40.0);
        }

        #[test]
        fn test_blocked_while_reference_data_loading() {
            let mut form = valid_form();
            form.begin_reference_load();
            assert!(!form.can_submit());
        }

        #[test]
        fn test_blocked_on_missing_fields() {
            let mut form = valid_form();
            form.set_employee("");
            assert!(!form.can_submit());
            assert!(form.draft().is_none());
        }

        #[test]
        fn test_blocked_on_amount_violation() {
            let mut form = valid_form();
            form.set_amount(90.0);
            assert!(!form.can_submit());
        }

        #[test]
        fn test_blocked_on_unparseable_date() {
            let mut form = valid_form();
            form.set_date("not-a-date".to_string());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_plain_date_is_normalized() {
            let mut form = valid_form();
            form.set_date("2026-03-01".to_string());
            let draft = form.draft().unwrap();
            assert_eq!(draft.date, "2026-03-01T00:00:00+00:00");
        }

        #[test]
        fn test_reset_returns_to_defaults() {
            let mut form = valid_form();
            form.reset();

            assert_eq!(form.amount(), 0.0);
            assert_eq!(form.department_id(), "");
            assert_eq!(form.employee_id(), "");
            assert_eq!(form.expense_type_id(), "");
            assert!(form.funds().is_none());
            assert!(form.selected_expense_type().is_none());
            assert!(!form.is_funds_loading());
            // Everyone is selectable again
            assert_eq!(form.filtered_employees().len(), 3);
            // Date comes back as a parseable "now"
            assert!(form.parsed_date().is_some());
        }

        #[test]
        fn test_reset_discards_in_flight_funds() {
            let mut form = valid_form();
            let request = form.set_department("marketing").unwrap();
            form.reset();
            form.apply_funds_result(request.generation, Ok(funds(77.0)));
            assert!(form.funds().is_none());
        }
    }
}
