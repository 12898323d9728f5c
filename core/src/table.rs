//! The in-memory feedback table: an ordered sequence of uniformly
//! shaped records with a fixed 11-column schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Column names, in on-disk and display order.
pub const COLUMNS: [&str; 11] = [
    "Participant_ID",
    "Name",
    "Age",
    "Gender",
    "Day",
    "Sport Event",
    "Score",
    "College",
    "State",
    "Satisfaction_Rating",
    "Feedback",
];

/// One row: a participant's feedback for one event day.
///
/// Identity fields (id, name, age, gender) are stable across a
/// participant's rows; everything else is redrawn per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub participant_id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub day: u32,
    pub sport_event: String,
    pub score: u32,
    pub college: String,
    pub state: String,
    pub satisfaction_rating: u32,
    pub feedback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTable {
    rows: Vec<FeedbackRecord>,
}

impl FeedbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn from_rows(rows: Vec<FeedbackRecord>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: FeedbackRecord) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[FeedbackRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count() -> usize {
        COLUMNS.len()
    }

    /// Number of distinct participant ids present.
    pub fn participant_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.participant_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Distinct sport events in first-appearance order. This is what
    /// a UI offers in its sport selectors, so order follows the data
    /// rather than the vocabulary.
    pub fn sport_events_present(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for row in &self.rows {
            if seen.insert(row.sport_event.as_str()) {
                out.push(row.sport_event.clone());
            }
        }
        out
    }
}
