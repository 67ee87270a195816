//! # Jurisdiction Identifiers
//!
//! [`JurisdictionId`] is the addressing primitive for the registry and the
//! mapper. The vocabulary is agreed externally (`eu-ai-act`, `us-ca`,
//! `singapore`, ...) and is deliberately not closed here: an id that no
//! module is registered for is a reportable mapping failure, not a parse error.
//!
//! ## Validation
//!
//! Must be non-empty after trimming. Ids are compared case-sensitively.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// -- Validating Deserialize for JurisdictionId --------------------------------

impl<'de> Deserialize<'de> for JurisdictionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A jurisdiction identifier such as `eu-ai-act` or `us-co`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct JurisdictionId(String);

impl JurisdictionId {
    /// Create a jurisdiction identifier, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJurisdictionId`] if the string is
    /// empty or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidJurisdictionId);
        }
        Ok(Self(trimmed))
    }

    /// Construct from a compile-time literal in the agreed vocabulary.
    ///
    /// Blank literals are a programming error, caught by a debug assertion.
    pub fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty(), "blank jurisdiction literal");
        Self(value.to_string())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JurisdictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for JurisdictionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for JurisdictionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for JurisdictionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
