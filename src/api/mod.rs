//! Backend API client module

mod client;
mod traits;

pub use client::HttpBackendClient;
pub use traits::BackendClient;

#[cfg(test)]
pub use traits::MockBackendClient;

use thiserror::Error;

/// Errors crossing the transport boundary
///
/// The `Api` variant displays as the server-provided message alone, so the
/// app layer can surface it to the user verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid server address: {0}")]
    InvalidAddress(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message_only() {
        let error = ApiError::Api {
            status: 422,
            message: "Amount exceeds the department limit".to_string(),
        };
        assert_eq!(error.to_string(), "Amount exceeds the department limit");
    }
}
