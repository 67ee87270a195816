//! # Trigger Rules & the Risk Ladder
//!
//! A [`TriggerRule`] is an atomic, evidence-producing predicate over the
//! product context. A [`RiskLadder`] is an ordered list of [`Rung`]s, each
//! pairing a target [`RiskLevel`] with the rules that reach it.
//!
//! ## Decision Ladder
//!
//! ```text
//! for rung in ladder (declaration order):
//!     satisfied = [rule for rule in rung.rules if rule(ctx)]
//!     if satisfied: return rung.level  (categories/provisions from satisfied only)
//! return Minimal (empty categories)
//! ```
//!
//! The precedence is the declaration order of the rungs, which makes it
//! inspectable: modules with prohibited practices declare their
//! `Unacceptable` rung first. A ladder never yields `Undetermined`.

use std::collections::HashSet;
use std::fmt;

use regscope_core::{ProductContext, RiskClassification, RiskLevel, Trigger};

/// Predicate signature: returns evidence when the rule is satisfied.
pub type Predicate = fn(&ProductContext) -> Option<String>;

// ---------------------------------------------------------------------------
// TriggerRule
// ---------------------------------------------------------------------------

/// An atomic regulatory rule.
#[derive(Clone, Copy)]
pub struct TriggerRule {
    /// Stable id, `<jurisdiction>.<slug>`.
    pub id: &'static str,
    pub description: &'static str,
    /// Citations attached to the classification when this rule fires.
    pub provisions: &'static [&'static str],
    pub predicate: Predicate,
}

impl fmt::Debug for TriggerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRule")
            .field("id", &self.id)
            .field("provisions", &self.provisions)
            .finish_non_exhaustive()
    }
}

impl TriggerRule {
    /// Evaluate the rule against a context.
    pub fn evaluate(&self, ctx: &ProductContext) -> Trigger {
        match (self.predicate)(ctx) {
            Some(evidence) => Trigger {
                id: self.id.to_string(),
                description: self.description.to_string(),
                satisfied: true,
                evidence,
            },
            None => Trigger {
                id: self.id.to_string(),
                description: self.description.to_string(),
                satisfied: false,
                evidence: String::new(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// RiskLadder
// ---------------------------------------------------------------------------

/// One step of a decision ladder.
#[derive(Debug, Clone, Copy)]
pub struct Rung {
    pub level: RiskLevel,
    pub rules: &'static [TriggerRule],
}

/// An explicit, ordered decision ladder for one legal regime.
#[derive(Debug, Clone, Copy)]
pub struct RiskLadder {
    /// Regime name used in justifications, e.g. `"EU AI Act"`.
    pub regime: &'static str,
    pub rungs: &'static [Rung],
    /// Justification when no rung fires.
    pub minimal_justification: &'static str,
}

impl RiskLadder {
    /// Run the cascade and produce a classification.
    pub fn classify(&self, ctx: &ProductContext) -> RiskClassification {
        for rung in self.rungs {
            let fired: Vec<(&TriggerRule, Trigger)> = rung
                .rules
                .iter()
                .map(|rule| (rule, rule.evaluate(ctx)))
                .filter(|(_, trigger)| trigger.satisfied)
                .collect();
            if fired.is_empty() {
                continue;
            }

            let mut seen = HashSet::new();
            let provisions: Vec<String> = fired
                .iter()
                .flat_map(|(rule, _)| rule.provisions.iter())
                .filter(|p| seen.insert(**p))
                .map(|p| p.to_string())
                .collect();
            let reasons: Vec<String> = fired
                .iter()
                .map(|(_, t)| format!("{} ({})", t.description, t.evidence))
                .collect();
            let applicable_categories = fired.into_iter().map(|(_, t)| t.id).collect();

            tracing::debug!(
                regime = self.regime,
                level = %rung.level,
                "decision ladder matched"
            );
            return RiskClassification {
                level: rung.level,
                justification: format!(
                    "{}: classified {} because {}",
                    self.regime,
                    rung.level,
                    reasons.join("; ")
                ),
                applicable_categories,
                provisions,
            };
        }

        tracing::debug!(regime = self.regime, "decision ladder fell through to minimal");
        RiskClassification {
            level: RiskLevel::Minimal,
            justification: format!("{}: {}", self.regime, self.minimal_justification),
            applicable_categories: Vec::new(),
            provisions: Vec::new(),
        }
    }

    /// Every rule on the ladder, in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &'static TriggerRule> {
        self.rungs.iter().flat_map(|rung| rung.rules.iter())
    }
}

// ---------------------------------------------------------------------------
// TriggerSet
// ---------------------------------------------------------------------------

/// Evaluated triggers for one context, queryable by id.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet {
    triggers: Vec<Trigger>,
}

impl TriggerSet {
    /// Evaluate `rules` in order. A rule id seen twice is evaluated once.
    pub fn evaluate<'a>(
        ctx: &ProductContext,
        rules: impl IntoIterator<Item = &'a TriggerRule>,
    ) -> Self {
        let mut seen = HashSet::new();
        let triggers = rules
            .into_iter()
            .filter(|rule| seen.insert(rule.id))
            .map(|rule| rule.evaluate(ctx))
            .collect();
        Self { triggers }
    }

    /// Whether the trigger with `id` was evaluated and satisfied.
    pub fn fired(&self, id: &str) -> bool {
        self.triggers.iter().any(|t| t.id == id && t.satisfied)
    }

    /// Whether any of `ids` fired.
    pub fn any_fired(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.fired(id))
    }

    pub fn into_vec(self) -> Vec<Trigger> {
        self.triggers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regscope_core::{JurisdictionId, ProductType};

    fn ctx(description: &str) -> ProductContext {
        ProductContext::new(
            description,
            ProductType::Other,
            vec![JurisdictionId::new("test").unwrap()],
        )
    }

    fn says_banned(ctx: &ProductContext) -> Option<String> {
        ctx.description
            .contains("banned")
            .then(|| "description says banned".to_string())
    }

    fn says_risky(ctx: &ProductContext) -> Option<String> {
        ctx.description
            .contains("risky")
            .then(|| "description says risky".to_string())
    }

    fn says_chat(ctx: &ProductContext) -> Option<String> {
        ctx.description
            .contains("chat")
            .then(|| "description says chat".to_string())
    }

    const PROHIBITED: &[TriggerRule] = &[TriggerRule {
        id: "t.banned",
        description: "Banned practice",
        provisions: &["Art. 1"],
        predicate: says_banned,
    }];
    const HIGH: &[TriggerRule] = &[
        TriggerRule {
            id: "t.risky",
            description: "Risky use",
            provisions: &["Art. 2", "Art. 3"],
            predicate: says_risky,
        },
        TriggerRule {
            id: "t.risky-chat",
            description: "Risky chat",
            provisions: &["Art. 3"],
            predicate: says_chat,
        },
    ];
    const LIMITED: &[TriggerRule] = &[TriggerRule {
        id: "t.chat",
        description: "Chat interface",
        provisions: &["Art. 4"],
        predicate: says_chat,
    }];

    static LADDER: RiskLadder = RiskLadder {
        regime: "Test Act",
        rungs: &[
            Rung {
                level: RiskLevel::Unacceptable,
                rules: PROHIBITED,
            },
            Rung {
                level: RiskLevel::High,
                rules: HIGH,
            },
            Rung {
                level: RiskLevel::Limited,
                rules: LIMITED,
            },
        ],
        minimal_justification: "no triggers matched",
    };

    #[test]
    fn falls_through_to_minimal() {
        let c = LADDER.classify(&ctx("plain tool"));
        assert_eq!(c.level, RiskLevel::Minimal);
        assert!(c.applicable_categories.is_empty());
        assert!(c.provisions.is_empty());
        assert_eq!(c.justification, "Test Act: no triggers matched");
    }

    #[test]
    fn first_matching_rung_wins() {
        let c = LADDER.classify(&ctx("banned and risky"));
        assert_eq!(c.level, RiskLevel::Unacceptable);
        assert_eq!(c.applicable_categories, vec!["t.banned"]);
    }

    #[test]
    fn categories_come_from_satisfied_rules_only() {
        let c = LADDER.classify(&ctx("risky"));
        assert_eq!(c.level, RiskLevel::High);
        assert_eq!(c.applicable_categories, vec!["t.risky"]);
        assert_eq!(c.provisions, vec!["Art. 2", "Art. 3"]);
    }

    #[test]
    fn provisions_are_deduplicated_in_order() {
        let c = LADDER.classify(&ctx("risky chat"));
        assert_eq!(c.applicable_categories, vec!["t.risky", "t.risky-chat"]);
        assert_eq!(c.provisions, vec!["Art. 2", "Art. 3"]);
        assert!(c.justification.contains("Risky chat (description says chat)"));
    }

    #[test]
    fn lower_rung_reached_when_higher_is_silent() {
        // "chat" fires both the high rung's second rule and the limited rule;
        // the high rung is checked first.
        let c = LADDER.classify(&ctx("chat"));
        assert_eq!(c.level, RiskLevel::High);
    }

    #[test]
    fn trigger_set_deduplicates_and_queries() {
        let set = TriggerSet::evaluate(&ctx("chat"), LADDER.rules().chain(LIMITED.iter()));
        assert!(set.fired("t.chat"));
        assert!(!set.fired("t.banned"));
        assert!(set.any_fired(&["t.banned", "t.risky-chat"]));
        let triggers = set.into_vec();
        assert_eq!(triggers.len(), 4);
        let satisfied: Vec<&str> = triggers
            .iter()
            .filter(|t| t.satisfied)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(satisfied, vec!["t.risky-chat", "t.chat"]);
    }

    #[test]
    fn unsatisfied_trigger_has_empty_evidence() {
        let t = HIGH[0].evaluate(&ctx("nothing"));
        assert!(!t.satisfied);
        assert!(t.evidence.is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The level is the first rung with a satisfied rule, regardless
            /// of word order.
            #[test]
            fn first_satisfied_rung_decides(
                words in prop::sample::subsequence(vec!["banned", "risky", "chat", "plain"], 0..=4)
                    .prop_shuffle()
            ) {
                let c = LADDER.classify(&ctx(&words.join(" ")));
                let expected = if words.contains(&"banned") {
                    RiskLevel::Unacceptable
                } else if words.contains(&"risky") || words.contains(&"chat") {
                    RiskLevel::High
                } else {
                    RiskLevel::Minimal
                };
                prop_assert_eq!(c.level, expected);
                prop_assert_ne!(c.level, RiskLevel::Undetermined);
                prop_assert_eq!(c.applicable_categories.is_empty(), expected == RiskLevel::Minimal);
            }
        }
    }
}
