//! Domain models mirroring the backend's JSON shapes
//!
//! Identifiers are opaque server-issued strings (`_id` on the wire). Amounts
//! are plain JSON numbers; the backend owns all derivation and rounding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A department as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub number_of_employees: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Period-scoped budget figures for a department
///
/// Every field is mandatory: a response missing any of them fails
/// deserialization and is handled as a fetch failure, so a partial payload
/// can never be mistaken for a funds snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentFunds {
    /// Budget assigned for the current period
    pub limit_amount: f64,
    /// Amount consumed so far this period
    pub spent_amount: f64,
    /// Unspent surplus rolled over from previous periods
    pub carryover: f64,
    /// `limit_amount + carryover`, derived server-side
    pub effective_limit: f64,
    /// `effective_limit - spent_amount`, derived server-side
    pub available: f64,
}

/// An employee with their owning department embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: Department,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A category of expense with a per-transaction ceiling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Maximum amount a single expense of this type may record,
    /// independent of any departmental budget
    pub limit: f64,
}

/// A recorded expense
///
/// The referenced entities come back embedded and may be null when the
/// server has since pruned a referent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub expense_type: Option<ExpenseType>,
    pub employee: Option<Employee>,
    pub department: Option<Department>,
}

impl Expense {
    pub fn department_name(&self) -> &str {
        self.department.as_ref().map(|d| d.name.as_str()).unwrap_or("—")
    }

    pub fn employee_name(&self) -> &str {
        self.employee.as_ref().map(|e| e.name.as_str()).unwrap_or("—")
    }

    pub fn type_name(&self) -> &str {
        self.expense_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("—")
    }
}

/// A monthly spending limit row for one department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyLimit {
    #[serde(rename = "_id")]
    pub id: String,
    pub department: String,
    pub year: i32,
    pub month: u32,
    pub limit_amount: f64,
    pub spent_amount: f64,
}

/// A per-department limit row as embedded in the dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentLimit {
    #[serde(rename = "_id")]
    pub id: String,
    pub department: Department,
    pub limit_amount: f64,
    pub spent_amount: f64,
    pub year: i32,
    pub month: u32,
}

impl DepartmentLimit {
    /// Remaining budget for the row, floored at zero for display
    pub fn remaining(&self) -> f64 {
        (self.limit_amount - self.spent_amount).max(0.0)
    }
}

/// Aggregate totals across all departments
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub total_limit: f64,
    pub total_spent: f64,
}

/// Dashboard summary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub summary: DashboardTotals,
    pub by_department: Vec<DepartmentLimit>,
    pub recent_expenses: Vec<Expense>,
}

/// An authenticated session, held in memory for the process lifetime
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub email: String,
}

// ---- Write-side DTOs: requests carry IDs, never embedded objects ----

/// Payload for creating an employee
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub name: String,
    pub position: String,
    /// Department ID
    pub department: String,
}

/// Payload for creating an expense type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub limit: f64,
}

/// Partial payload for updating an expense type
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
}

/// Payload for creating an expense
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpense {
    pub amount: f64,
    /// RFC 3339 timestamp, as entered in the form
    pub date: String,
    /// ExpenseType ID
    pub expense_type: String,
    /// Employee ID
    pub employee: String,
    /// Department ID
    pub department: String,
}

/// Payload for setting a department's monthly limit
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMonthlyLimit {
    /// Department ID
    pub department: String,
    pub year: i32,
    pub month: u32,
    pub limit_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_funds_requires_all_fields() {
        // A partial payload must not deserialize into a snapshot
        let partial = r#"{"limitAmount": 100.0, "spentAmount": 20.0}"#;
        assert!(serde_json::from_str::<DepartmentFunds>(partial).is_err());

        let full = r#"{
            "limitAmount": 100.0,
            "spentAmount": 20.0,
            "carryover": 5.0,
            "effectiveLimit": 105.0,
            "available": 85.0
        }"#;
        let funds: DepartmentFunds = serde_json::from_str(full).unwrap();
        assert_eq!(funds.available, 85.0);
        assert!(funds.available <= funds.effective_limit);
    }

    #[test]
    fn test_department_wire_shape() {
        let json = r#"{
            "_id": "dep-1",
            "name": "Sales",
            "numberOfEmployees": 4,
            "createdAt": "2026-01-05T10:00:00Z",
            "updatedAt": "2026-01-06T10:00:00Z"
        }"#;
        let dep: Department = serde_json::from_str(json).unwrap();
        assert_eq!(dep.id, "dep-1");
        assert_eq!(dep.number_of_employees, 4);
        assert!(dep.created_at.is_some());
    }

    #[test]
    fn test_expense_tolerates_pruned_referents() {
        let json = r#"{
            "_id": "exp-1",
            "amount": 12.5,
            "date": "2026-02-01T00:00:00Z",
            "expenseType": null,
            "employee": null,
            "department": null
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.department_name(), "—");
        assert_eq!(expense.employee_name(), "—");
        assert_eq!(expense.type_name(), "—");
    }

    #[test]
    fn test_create_expense_serializes_camel_case_ids() {
        let dto = CreateExpense {
            amount: 40.0,
            date: "2026-02-01T00:00:00Z".to_string(),
            expense_type: "type-1".to_string(),
            employee: "emp-1".to_string(),
            department: "dep-1".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["expenseType"], "type-1");
        assert_eq!(json["employee"], "emp-1");
        assert_eq!(json["department"], "dep-1");
    }

    #[test]
    fn test_update_expense_type_skips_absent_fields() {
        let dto = UpdateExpenseType {
            limit: Some(250.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"limit":250.0}"#);
    }

    #[test]
    fn test_department_limit_remaining_floors_at_zero() {
        let json = r#"{
            "_id": "lim-1",
            "department": {"_id": "dep-1", "name": "Sales", "numberOfEmployees": 0,
                           "createdAt": null, "updatedAt": null},
            "limitAmount": 100.0,
            "spentAmount": 130.0,
            "year": 2026,
            "month": 2
        }"#;
        let row: DepartmentLimit = serde_json::from_str(json).unwrap();
        assert_eq!(row.remaining(), 0.0);
    }
}
