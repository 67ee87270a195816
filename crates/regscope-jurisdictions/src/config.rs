//! # Registry Configuration
//!
//! Selects which built-in jurisdictions a registry carries and optionally
//! overrides their display metadata. Callers supply the text; this crate
//! never reads files.
//!
//! ```yaml
//! entries:
//!   - id: eu-ai-act
//!   - id: singapore
//!     name: Singapore (MAS-regulated entities)
//!   - id: us-federal
//!     enabled: false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::jurisdiction::Jurisdiction;

/// One configured jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntryConfig {
    /// Built-in jurisdiction id, e.g. `eu-ai-act`.
    pub id: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn enabled_by_default() -> bool {
    true
}

impl RegistryEntryConfig {
    /// An enabled entry with no overrides.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            name: None,
            region: None,
            description: None,
        }
    }

    /// Resolve the id against the built-in set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownJurisdiction`] for ids with no module.
    pub fn jurisdiction(&self) -> Result<Jurisdiction, ConfigError> {
        self.id.parse()
    }
}

/// The set of jurisdictions a registry is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    #[serde(default)]
    pub entries: Vec<RegistryEntryConfig>,
}

impl RegistryConfig {
    /// Every built-in jurisdiction, enabled, without overrides.
    pub fn all() -> Self {
        Self {
            entries: Jurisdiction::all()
                .iter()
                .map(|j| RegistryEntryConfig::new(j.as_str()))
                .collect(),
        }
    }

    /// Only the given jurisdictions.
    pub fn only(jurisdictions: &[Jurisdiction]) -> Self {
        Self {
            entries: jurisdictions
                .iter()
                .map(|j| RegistryEntryConfig::new(j.as_str()))
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Entries with `enabled: true`, in configuration order.
    pub fn enabled(&self) -> impl Iterator<Item = &RegistryEntryConfig> {
        self.entries.iter().filter(|e| e.enabled)
    }
}
