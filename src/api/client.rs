//! HTTP client for communicating with the Outlay backend
//!
//! Thin JSON-over-REST wrapper: one method per endpoint, bearer-token
//! authentication, and server error bodies (`{"message": ...}`) surfaced
//! as the error's display text.

use std::sync::RwLock;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::{ApiError, ApiResult, BackendClient};
use crate::state::{
    CreateEmployee, CreateExpense, CreateExpenseType, DashboardSummary, Department,
    DepartmentFunds, Employee, Expense, ExpenseType, MonthlyLimit, Session, SetMonthlyLimit,
    UpdateExpenseType,
};

/// Request timeout for every backend call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct AuthUser {
    email: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for communicating with the Outlay backend
pub struct HttpBackendClient {
    client: Client,
    base_url: String,
    /// Session token, set by login and dropped by logout
    token: RwLock<Option<String>>,
}

impl HttpBackendClient {
    /// Create a new backend client for the given server address
    pub fn new(base_url: &str) -> ApiResult<Self> {
        if base_url.trim().is_empty() {
            return Err(ApiError::InvalidAddress(base_url.to_string()));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when a session exists
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        };
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn store_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .authorized(self.client.get(self.endpoint(path)))
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(error_from(status, response).await)
    }
}

async fn read_empty(response: Response) -> ApiResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(error_from(status, response).await)
    }
}

/// Pull the server's `{"message": ...}` body when there is one
async fn error_from(status: StatusCode, response: Response) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("request failed with status {status}"));
    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .client
            .post(self.endpoint("/api/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(ApiError::from)?;
        let auth: AuthResponse = read_json(response).await?;
        self.store_token(Some(auth.token.clone()));
        Ok(Session {
            token: auth.token,
            email: auth.user.email,
        })
    }

    async fn register(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint("/api/auth/register"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(ApiError::from)?;
        let registered: RegisterResponse = read_json(response).await?;
        Ok(registered.user.email)
    }

    fn logout(&self) {
        self.store_token(None);
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        Ok(self.get_json("/api/departments").await?)
    }

    async fn create_department(&self, name: &str) -> Result<Department> {
        let response = self
            .authorized(self.client.post(self.endpoint("/api/departments")))
            .json(&json!({ "name": name }))
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_json(response).await?)
    }

    async fn get_available_funds(&self, department_id: &str) -> Result<DepartmentFunds> {
        Ok(self
            .get_json(&format!("/api/departments/{department_id}/funds"))
            .await?)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.get_json("/api/employees").await?)
    }

    async fn create_employee(&self, request: CreateEmployee) -> Result<Employee> {
        let response = self
            .authorized(self.client.post(self.endpoint("/api/employees")))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_json(response).await?)
    }

    async fn list_expense_types(&self) -> Result<Vec<ExpenseType>> {
        Ok(self.get_json("/api/expense-types").await?)
    }

    async fn create_expense_type(&self, request: CreateExpenseType) -> Result<ExpenseType> {
        let response = self
            .authorized(self.client.post(self.endpoint("/api/expense-types")))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_json(response).await?)
    }

    async fn update_expense_type(
        &self,
        expense_type_id: &str,
        request: UpdateExpenseType,
    ) -> Result<ExpenseType> {
        let url = self.endpoint(&format!("/api/expense-types/{expense_type_id}"));
        let response = self
            .authorized(self.client.patch(url))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_json(response).await?)
    }

    async fn delete_expense_type(&self, expense_type_id: &str) -> Result<()> {
        let url = self.endpoint(&format!("/api/expense-types/{expense_type_id}"));
        let response = self
            .authorized(self.client.delete(url))
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_empty(response).await?)
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.get_json("/api/expenses").await?)
    }

    async fn create_expense(&self, request: CreateExpense) -> Result<Expense> {
        let response = self
            .authorized(self.client.post(self.endpoint("/api/expenses")))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_json(response).await?)
    }

    async fn set_monthly_limit(&self, request: SetMonthlyLimit) -> Result<MonthlyLimit> {
        let response = self
            .authorized(self.client.post(self.endpoint("/api/limits")))
            .json(&request)
            .send()
            .await
            .map_err(ApiError::from)?;
        Ok(read_json(response).await?)
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        Ok(self.get_json("/api/dashboard/summary").await?)
    }
}
