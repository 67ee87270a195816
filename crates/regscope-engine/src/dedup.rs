//! # Dedup and Prioritize
//!
//! Merges per-jurisdiction requirement lists into one cross-jurisdiction
//! view. Occurrences are grouped by id:
//!
//! - the attribution is every jurisdiction that raised the id, first-seen
//!   order, no repeats;
//! - the kept requirement is the occurrence with the strictly highest
//!   weight, the first-seen one on ties.
//!
//! Groups come out in the order their id was first seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use regscope_core::{ActionRequirement, ArtifactRequirement, JurisdictionId, JurisdictionResult};

/// A requirement that can be merged across jurisdictions.
pub trait Prioritized {
    /// Grouping key.
    fn key(&self) -> &str;

    /// Merge weight; a strictly greater weight replaces the kept occurrence.
    fn weight(&self) -> u8;
}

impl Prioritized for ActionRequirement {
    fn key(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> u8 {
        self.priority.rank()
    }
}

impl Prioritized for ArtifactRequirement {
    fn key(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> u8 {
        u8::from(self.required)
    }
}

/// One merged requirement and the jurisdictions that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRequirement<T> {
    pub item: T,
    pub jurisdictions: Vec<JurisdictionId>,
}

/// Merge `(jurisdiction, requirement)` occurrences.
pub fn dedup_and_prioritize<T, I>(occurrences: I) -> Vec<MergedRequirement<T>>
where
    T: Prioritized + Clone,
    I: IntoIterator<Item = (JurisdictionId, T)>,
{
    let mut merged: Vec<MergedRequirement<T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (jurisdiction, item) in occurrences {
        match index.get(item.key()) {
            Some(&at) => {
                let group = &mut merged[at];
                if !group.jurisdictions.contains(&jurisdiction) {
                    group.jurisdictions.push(jurisdiction);
                }
                if item.weight() > group.item.weight() {
                    group.item = item;
                }
            }
            None => {
                index.insert(item.key().to_string(), merged.len());
                merged.push(MergedRequirement {
                    item,
                    jurisdictions: vec![jurisdiction],
                });
            }
        }
    }
    merged
}

/// Merged artifacts across results.
pub fn merge_artifacts(results: &[JurisdictionResult]) -> Vec<MergedRequirement<ArtifactRequirement>> {
    dedup_and_prioritize(results.iter().flat_map(|r| {
        r.required_artifacts
            .iter()
            .map(move |a| (r.jurisdiction.clone(), a.clone()))
    }))
}

/// Merged actions across results, required and recommended alike.
pub fn merge_actions(results: &[JurisdictionResult]) -> Vec<MergedRequirement<ActionRequirement>> {
    dedup_and_prioritize(results.iter().flat_map(|r| {
        r.all_actions()
            .map(move |a| (r.jurisdiction.clone(), a.clone()))
    }))
}
