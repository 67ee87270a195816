//! # Registry and Configuration Errors

use thiserror::Error;

use regscope_core::JurisdictionId;

/// Errors from registry lookups and registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No module is registered under the requested id.
    #[error("jurisdiction '{0}' is not registered")]
    NotRegistered(JurisdictionId),

    /// A module is already registered under this id.
    #[error("jurisdiction '{0}' is already registered")]
    AlreadyRegistered(JurisdictionId),
}

/// Errors while building a registry from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration names a jurisdiction with no built-in module.
    #[error("unknown jurisdiction '{0}' in registry configuration")]
    UnknownJurisdiction(String),

    /// The configuration could not be parsed.
    #[error("invalid registry configuration: {0}")]
    Parse(String),

    /// Registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
