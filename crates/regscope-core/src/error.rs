//! # Error Types: Structured Error Hierarchy
//!
//! Defines the leaf error types shared across regscope. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors name the offending field and value.
//! - Canonicalization errors carry the rejected value.
//! - Higher crates (`regscope-jurisdictions`, `regscope-engine`) define their
//!   own error enums and wrap these leaf errors via `#[from]`.

use thiserror::Error;

/// Top-level error type for regscope core operations.
#[derive(Error, Debug)]
pub enum RegscopeError {
    /// A domain value failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RegscopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Validation failure for a domain primitive or a product context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction identifiers must be non-empty.
    #[error("jurisdiction id must be a non-empty string")]
    InvalidJurisdictionId,

    /// A product context must target at least one market.
    #[error("product context must target at least one market")]
    EmptyTargetMarkets,

    /// The same market appears more than once in `target_markets`.
    #[error("target market '{0}' is listed more than once")]
    DuplicateTargetMarket(String),

    /// The free-text description is blank.
    #[error("product description must not be blank")]
    BlankDescription,
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::DuplicateTargetMarket("uk".into());
        assert_eq!(format!("{err}"), "target market 'uk' is listed more than once");
    }

    #[test]
    fn validation_converts_into_top_level() {
        let err: RegscopeError = ValidationError::EmptyTargetMarkets.into();
        assert!(matches!(err, RegscopeError::Validation(_)));
        assert!(format!("{err}").starts_with("validation error:"));
    }

    #[test]
    fn float_rejected_display_carries_value() {
        let err = CanonicalizationError::FloatRejected(1.5);
        assert!(format!("{err}").contains("1.5"));
    }

    #[test]
    fn serde_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: RegscopeError = parse.unwrap_err().into();
        assert!(matches!(err, RegscopeError::Serialization(_)));
    }
}
