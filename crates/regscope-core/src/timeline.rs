//! # Compliance Timeline
//!
//! Authored, static milestones for a legal regime. Dates are calendar dates
//! (`chrono::NaiveDate`); the engine never reads the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated obligation or legal event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub date: NaiveDate,
    pub label: String,
    pub description: String,
}

/// The compliance calendar for one jurisdiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTimeline {
    /// Date the governing law took (or takes) effect, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Milestones in ascending date order.
    pub milestones: Vec<Milestone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl ComplianceTimeline {
    pub fn new(effective_date: Option<NaiveDate>) -> Self {
        Self {
            effective_date,
            milestones: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Add a milestone, keeping the list sorted by date (stable for equal dates).
    ///
    /// Returns `self` unchanged if `(year, month, day)` is not a valid date.
    pub fn milestone(
        mut self,
        (year, month, day): (i32, u32, u32),
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            return self;
        };
        let at = self.milestones.partition_point(|m| m.date <= date);
        self.milestones.insert(
            at,
            Milestone {
                date,
                label: label.into(),
                description: description.into(),
            },
        );
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The first milestone strictly after `date`, if any.
    pub fn next_after(&self, date: NaiveDate) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.date > date)
    }
}

/// Build a `NaiveDate` from authored constants.
pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
