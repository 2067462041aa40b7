//! Configuration handling for the TUI

use crate::client::DEFAULT_ENDPOINT;
use crate::state::{FieldSpec, FormSchema, FormVariant, Theme};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the registration endpoint
pub const ENDPOINT_ENV: &str = "REGISTER_ENDPOINT";

/// Seconds the confirmation screen stays up by default
const DEFAULT_CONFIRMATION_DELAY_SECS: u64 = 5;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Registration endpoint URL
    pub endpoint: Option<String>,
    /// Built-in form layout
    pub form_variant: Option<FormVariant>,
    /// Custom field list, takes precedence over `form_variant`
    pub fields: Option<Vec<FieldSpec>>,
    /// Color theme preference
    pub theme: Option<Theme>,
    /// Seconds before the confirmation screen returns home
    pub confirmation_delay_secs: Option<u64>,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "register", "register-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a file, defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: AppConfig = serde_json::from_str(&content)?;
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint to post registrations to: env, then file, then default
    pub fn endpoint(&self) -> String {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Field schema for the registration form
    pub fn schema(&self) -> FormSchema {
        match self.fields.clone().map(FormSchema::new) {
            Some(schema) if !schema.is_empty() => schema,
            _ => self.form_variant.unwrap_or_default().schema(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_secs(
            self.confirmation_delay_secs
                .unwrap_or(DEFAULT_CONFIRMATION_DELAY_SECS),
        )
    }
}
