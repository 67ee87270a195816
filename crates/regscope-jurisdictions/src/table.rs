//! # Obligation Tables
//!
//! Each jurisdiction module authors its provisions, artifacts and actions as
//! static tables keyed on trigger ids. An entry applies when any trigger in
//! its `when` list fired; an empty `when` list means the entry always
//! applies to products placed in that market.
//!
//! Output preserves table order, so the authored order is the presentation
//! order.

use regscope_core::{
    ActionRequirement, ArtifactRequirement, ArtifactType, Priority, Provision,
};

use crate::trigger::TriggerSet;

/// A legal provision and the triggers that make it applicable.
#[derive(Debug, Clone, Copy)]
pub struct ProvisionEntry {
    pub citation: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub when: &'static [&'static str],
}

/// A compliance document and the triggers that require it.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactEntry {
    pub id: &'static str,
    pub artifact_type: ArtifactType,
    pub name: &'static str,
    pub required: bool,
    pub template: Option<&'static str>,
    pub when: &'static [&'static str],
}

/// An action and the triggers that require it.
#[derive(Debug, Clone, Copy)]
pub struct ActionEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub legal_basis: &'static str,
    pub priority: Priority,
    pub effort: Option<&'static str>,
    pub deadline: Option<&'static str>,
    pub when: &'static [&'static str],
}

fn applies(when: &[&str], triggers: &TriggerSet) -> bool {
    when.is_empty() || triggers.any_fired(when)
}

pub fn provisions(table: &[ProvisionEntry], triggers: &TriggerSet) -> Vec<Provision> {
    table
        .iter()
        .filter(|e| applies(e.when, triggers))
        .map(|e| Provision::new(e.citation, e.title, e.summary))
        .collect()
}

pub fn artifacts(table: &[ArtifactEntry], triggers: &TriggerSet) -> Vec<ArtifactRequirement> {
    table
        .iter()
        .filter(|e| applies(e.when, triggers))
        .map(|e| {
            let artifact = if e.required {
                ArtifactRequirement::required(e.id, e.artifact_type, e.name)
            } else {
                ArtifactRequirement::optional(e.id, e.artifact_type, e.name)
            };
            match e.template {
                Some(template) => artifact.with_template(template),
                None => artifact,
            }
        })
        .collect()
}

pub fn actions(table: &[ActionEntry], triggers: &TriggerSet) -> Vec<ActionRequirement> {
    table
        .iter()
        .filter(|e| applies(e.when, triggers))
        .map(|e| {
            let mut action =
                ActionRequirement::new(e.id, e.title, e.description, e.legal_basis, e.priority);
            if let Some(effort) = e.effort {
                action = action.with_effort(effort);
            }
            if let Some(deadline) = e.deadline {
                action = action.with_deadline(deadline);
            }
            action
        })
        .collect()
}
