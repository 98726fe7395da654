//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the audit
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, AuditResult};

use super::types::AuditConfig;

/// Loads and provides access to the audit configuration.
///
/// # Example
///
/// ```no_run
/// use timecard_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./audit.yaml")?;
/// println!("Streak threshold: {}", loader.config().rules.consecutive_days);
/// # Ok::<(), timecard_audit::error::AuditError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown keys (`ConfigParseError`)
    /// - The values are inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|err| match err {
            AuditError::ConfigParseError { message, .. } => AuditError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> AuditResult<Self> {
        let config: AuditConfig =
            serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AuditConfig {
        self.config
    }
}
