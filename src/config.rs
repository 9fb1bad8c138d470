//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend address, overridable via config or `OUTLAY_SERVER_ADDRESS`
pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost:3000";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend server address
    pub server_address: Option<String>,
    /// Expense sort field
    pub expense_sort_field: Option<String>,
    /// Expense sort direction
    pub expense_sort_direction: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "outlay", "outlay-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve the backend address: env var, then config, then the default
    pub fn resolved_server_address(&self) -> String {
        std::env::var("OUTLAY_SERVER_ADDRESS")
            .ok()
            .or_else(|| self.server_address.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.server_address.is_none());
        assert!(config.expense_sort_field.is_none());
        assert!(config.expense_sort_direction.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            server_address: Some("http://localhost:4000".to_string()),
            expense_sort_field: Some("amount".to_string()),
            expense_sort_direction: Some("asc".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.server_address,
            Some("http://localhost:4000".to_string())
        );
        assert_eq!(parsed.expense_sort_field, Some("amount".to_string()));
        assert_eq!(parsed.expense_sort_direction, Some("asc".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.server_address.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"serverAddress": "x", "server_address": "http://h", "unknown": 1}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.server_address, Some("http://h".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_resolved_address_falls_back_to_default() {
        let config = TuiConfig::default();
        if std::env::var("OUTLAY_SERVER_ADDRESS").is_err() {
            assert_eq!(config.resolved_server_address(), DEFAULT_SERVER_ADDRESS);
        }
    }
}
