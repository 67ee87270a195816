//! # Mapping Errors

use thiserror::Error;

use regscope_core::CanonicalizationError;
use regscope_jurisdictions::RegistryError;

/// Errors raised while mapping a product context.
#[derive(Error, Debug)]
pub enum MappingError {
    /// The requested jurisdiction has no registered module.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A result could not be fingerprinted.
    #[error("fingerprint failed: {0}")]
    Fingerprint(#[from] CanonicalizationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use regscope_core::JurisdictionId;

    #[test]
    fn registry_message_passes_through() {
        let err: MappingError =
            RegistryError::NotRegistered(JurisdictionId::new("us-federal").unwrap()).into();
        assert_eq!(err.to_string(), "jurisdiction 'us-federal' is not registered");
    }

    #[test]
    fn fingerprint_failure_names_the_cause() {
        let err: MappingError = CanonicalizationError::FloatRejected(0.5).into();
        assert!(err.to_string().starts_with("fingerprint failed:"));
    }
}
