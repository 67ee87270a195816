//! # Jurisdiction Registry
//!
//! An owned lookup table from jurisdiction id to module plus display
//! metadata. A registry is built once, at startup, and then shared by
//! reference (or `Arc`) with every mapping call. Nothing is discovered
//! implicitly: each entry is the result of an explicit [`register`] call,
//! either directly or through [`JurisdictionRegistry::with_builtins`] /
//! [`JurisdictionRegistry::from_config`].
//!
//! Iteration order is the sorted id order, independent of registration
//! order.
//!
//! [`register`]: JurisdictionRegistry::register

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use regscope_core::JurisdictionId;

use crate::config::RegistryConfig;
use crate::error::{ConfigError, RegistryError};
use crate::jurisdiction::Jurisdiction;
use crate::module::JurisdictionModule;

/// A registered jurisdiction.
#[derive(Clone)]
pub struct RegistryEntry {
    pub id: JurisdictionId,
    pub name: String,
    pub region: String,
    pub description: String,
    pub module: Arc<dyn JurisdictionModule>,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl RegistryEntry {
    /// Entry for a built-in jurisdiction with its default metadata.
    pub fn builtin(jurisdiction: Jurisdiction) -> Self {
        Self {
            id: jurisdiction.id(),
            name: jurisdiction.name().to_string(),
            region: jurisdiction.region().to_string(),
            description: jurisdiction.description().to_string(),
            module: jurisdiction.module(),
        }
    }
}

/// Jurisdiction id to module lookup.
#[derive(Debug, Clone, Default)]
pub struct JurisdictionRegistry {
    entries: BTreeMap<JurisdictionId, RegistryEntry>,
}

impl JurisdictionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in jurisdiction.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for jurisdiction in Jurisdiction::all() {
            registry
                .entries
                .insert(jurisdiction.id(), RegistryEntry::builtin(*jurisdiction));
        }
        tracing::debug!(count = registry.len(), "registered built-in jurisdictions");
        registry
    }

    /// Build a registry from configuration, applying metadata overrides.
    /// Disabled entries are skipped.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownJurisdiction`] for an id with no built-in module.
    /// - [`ConfigError::Registry`] when an id appears twice among enabled entries.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for entry in config.enabled() {
            let jurisdiction = entry.jurisdiction()?;
            let mut registered = RegistryEntry::builtin(jurisdiction);
            if let Some(name) = &entry.name {
                registered.name = name.clone();
            }
            if let Some(region) = &entry.region {
                registered.region = region.clone();
            }
            if let Some(description) = &entry.description {
                registered.description = description.clone();
            }
            registry.register(registered)?;
        }
        tracing::info!(count = registry.len(), "jurisdiction registry built from configuration");
        Ok(registry)
    }

    /// Add an entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if the id is taken; the
    /// existing entry is left in place.
    pub fn register(&mut self, entry: RegistryEntry) -> Result<(), RegistryError> {
        if self.entries.contains_key(&entry.id) {
            return Err(RegistryError::AlreadyRegistered(entry.id));
        }
        tracing::debug!(jurisdiction = %entry.id, name = %entry.name, "registered jurisdiction");
        self.entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    /// Look up an entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotRegistered`] carrying the requested id.
    pub fn get(&self, id: &JurisdictionId) -> Result<&RegistryEntry, RegistryError> {
        self.entries
            .get(id)
            .ok_or_else(|| RegistryError::NotRegistered(id.clone()))
    }

    pub fn contains(&self, id: &JurisdictionId) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<JurisdictionId> {
        self.entries.keys().cloned().collect()
    }

    /// Registered entries in sorted id order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry. Intended for test isolation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryEntryConfig;

    fn id(s: &str) -> JurisdictionId {
        JurisdictionId::new(s).unwrap()
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = JurisdictionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains(&id("eu-ai-act")));
    }

    #[test]
    fn lookup_of_unregistered_id_names_it() {
        let registry = JurisdictionRegistry::new();
        let err = registry.get(&id("us-federal")).unwrap_err();
        assert_eq!(err, RegistryError::NotRegistered(id("us-federal")));
        assert_eq!(err.to_string(), "jurisdiction 'us-federal' is not registered");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = JurisdictionRegistry::new();
        registry
            .register(RegistryEntry::builtin(Jurisdiction::Uk))
            .unwrap();
        let mut renamed = RegistryEntry::builtin(Jurisdiction::Uk);
        renamed.name = "Great Britain".into();
        let err = registry.register(renamed).unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered(id("uk")));
        assert_eq!(registry.get(&id("uk")).unwrap().name, "United Kingdom");
    }

    #[test]
    fn builtins_are_sorted_by_id() {
        let registry = JurisdictionRegistry::with_builtins();
        assert_eq!(registry.len(), 12);
        let ids: Vec<String> = registry.ids().iter().map(|i| i.to_string()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first().map(String::as_str), Some("brazil"));
    }

    #[test]
    fn entry_module_matches_its_id() {
        let registry = JurisdictionRegistry::with_builtins();
        for entry in registry.entries() {
            assert_eq!(entry.module.jurisdiction().as_str(), entry.id.as_str());
        }
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut registry = JurisdictionRegistry::with_builtins();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get(&id("china")).is_err());
    }

    #[test]
    fn config_applies_overrides_and_skips_disabled() {
        let mut singapore = RegistryEntryConfig::new("singapore");
        singapore.region = Some("Southeast Asia".into());
        let mut federal = RegistryEntryConfig::new("us-federal");
        federal.enabled = false;
        let config = RegistryConfig {
            entries: vec![RegistryEntryConfig::new("eu-ai-act"), singapore, federal],
        };

        let registry = JurisdictionRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(&id("singapore")).unwrap().region, "Southeast Asia");
        assert!(!registry.contains(&id("us-federal")));
    }

    #[test]
    fn config_rejects_unknown_and_duplicate_ids() {
        let config = RegistryConfig {
            entries: vec![RegistryEntryConfig::new("atlantis")],
        };
        assert!(matches!(
            JurisdictionRegistry::from_config(&config),
            Err(ConfigError::UnknownJurisdiction(_))
        ));

        let config = RegistryConfig {
            entries: vec![RegistryEntryConfig::new("china"), RegistryEntryConfig::new("china")],
        };
        assert!(matches!(
            JurisdictionRegistry::from_config(&config),
            Err(ConfigError::Registry(RegistryError::AlreadyRegistered(_)))
        ));
    }
}
