//! Trait abstraction for the backend client to enable mocking in tests

use crate::state::{
    CreateEmployee, CreateExpense, CreateExpenseType, DashboardSummary, Department,
    DepartmentFunds, Employee, Expense, ExpenseType, MonthlyLimit, Session, SetMonthlyLimit,
    UpdateExpenseType,
};
use anyhow::Result;
use async_trait::async_trait;

/// Trait for backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Authenticate and keep the session token for subsequent calls
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// Register a new account; returns the registered email
    async fn register(&self, email: &str, password: &str) -> Result<String>;

    /// Drop the session token
    fn logout(&self);

    /// List all departments
    async fn list_departments(&self) -> Result<Vec<Department>>;

    /// Create a department
    async fn create_department(&self, name: &str) -> Result<Department>;

    /// Current-period budget figures for one department
    async fn get_available_funds(&self, department_id: &str) -> Result<DepartmentFunds>;

    /// List all employees
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Create an employee
    async fn create_employee(&self, request: CreateEmployee) -> Result<Employee>;

    /// List all expense types
    async fn list_expense_types(&self) -> Result<Vec<ExpenseType>>;

    /// Create an expense type
    async fn create_expense_type(&self, request: CreateExpenseType) -> Result<ExpenseType>;

    /// Update an existing expense type
    async fn update_expense_type(
        &self,
        expense_type_id: &str,
        request: UpdateExpenseType,
    ) -> Result<ExpenseType>;

    /// Delete an expense type
    async fn delete_expense_type(&self, expense_type_id: &str) -> Result<()>;

    /// List all expenses
    async fn list_expenses(&self) -> Result<Vec<Expense>>;

    /// Create an expense
    async fn create_expense(&self, request: CreateExpense) -> Result<Expense>;

    /// Set a department's monthly spending limit
    async fn set_monthly_limit(&self, request: SetMonthlyLimit) -> Result<MonthlyLimit>;

    /// Aggregate dashboard summary
    async fn dashboard_summary(&self) -> Result<DashboardSummary>;
}
