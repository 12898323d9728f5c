//! Aggregation over the feedback table.
//!
//! Three views, each a pure function of its inputs:
//!   1. Frequency counts by a selected dimension.
//!   2. Mean satisfaction per sport over a chosen subset of sports.
//!   3. A space-joined feedback blob for one sport, plus word counts
//!      over such a blob for word-frequency display.
//!
//! An empty (or filtered-to-empty) table yields empty summaries, not
//! errors. Unknown dimension or sport names are InvalidArgument.

use crate::{
    error::{FeedbackError, FeedbackResult},
    table::FeedbackTable,
    vocab::Vocabulary,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// A column selectable for frequency aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Age,
    College,
    State,
    SportEvent,
    SatisfactionRating,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Age,
        Dimension::College,
        Dimension::State,
        Dimension::SportEvent,
        Dimension::SatisfactionRating,
    ];

    /// Display label, matching the table's column name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::College => "College",
            Self::State => "State",
            Self::SportEvent => "Sport Event",
            Self::SatisfactionRating => "Satisfaction_Rating",
        }
    }

    /// Parse a user-supplied dimension name (column-name spelling).
    pub fn parse(name: &str) -> FeedbackResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label() == name)
            .ok_or_else(|| {
                FeedbackError::InvalidArgument(format!(
                    "unknown dimension '{name}' (expected one of: Age, College, State, \
                     Sport Event, Satisfaction_Rating)"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub category: String,
    pub count: u64,
}

/// (category, count) pairs for one dimension. Categories come out in
/// sorted order for stable output; callers may re-sort for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencySummary {
    pub dimension: String,
    pub rows: Vec<FrequencyRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatisfactionRow {
    pub sport_event: String,
    pub mean_satisfaction: f64,
}

/// Count table rows per distinct value of `dimension`.
pub fn frequency(table: &FeedbackTable, dimension: Dimension) -> FrequencySummary {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for row in table.rows() {
        let category = match dimension {
            Dimension::Age => row.age.to_string(),
            Dimension::College => row.college.clone(),
            Dimension::State => row.state.clone(),
            Dimension::SportEvent => row.sport_event.clone(),
            Dimension::SatisfactionRating => row.satisfaction_rating.to_string(),
        };
        *counts.entry(category).or_insert(0) += 1;
    }

    FrequencySummary {
        dimension: dimension.label().to_string(),
        rows: counts
            .into_iter()
            .map(|(category, count)| FrequencyRow { category, count })
            .collect(),
    }
}

/// Mean satisfaction rating per sport, restricted to `sports`.
///
/// The subset keeps its given order. A sport outside the fixed
/// vocabulary is InvalidArgument; a vocabulary sport with no rows in
/// the table simply contributes no output row. An empty subset yields
/// an empty summary.
pub fn satisfaction_by_sport(
    table: &FeedbackTable,
    sports: &[&str],
) -> FeedbackResult<Vec<SatisfactionRow>> {
    for sport in sports {
        require_known_sport(sport)?;
    }

    let mut out = Vec::new();
    for sport in sports {
        let mut sum = 0u64;
        let mut count = 0u64;
        for row in table.rows() {
            if row.sport_event == *sport {
                sum += u64::from(row.satisfaction_rating);
                count += 1;
            }
        }
        if count > 0 {
            out.push(SatisfactionRow {
                sport_event: (*sport).to_string(),
                mean_satisfaction: sum as f64 / count as f64,
            });
        }
    }
    Ok(out)
}

/// Space-joined feedback text of every row for `sport`. Empty string
/// when no rows match; the presentation layer decides whether to
/// render a word-frequency visualization or a placeholder.
pub fn feedback_for_sport(table: &FeedbackTable, sport: &str) -> FeedbackResult<String> {
    require_known_sport(sport)?;

    let texts: Vec<&str> = table
        .rows()
        .iter()
        .filter(|r| r.sport_event == sport)
        .map(|r| r.feedback.as_str())
        .collect();
    Ok(texts.join(" "))
}

/// Word counts over a feedback blob: lowercased, punctuation stripped
/// from word edges, ordered by descending count then alphabetically.
pub fn word_frequencies(text: &str) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for raw in text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut out: Vec<(String, u64)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

fn require_known_sport(sport: &str) -> FeedbackResult<()> {
    if Vocabulary::is_sport_event(sport) {
        Ok(())
    } else {
        Err(FeedbackError::InvalidArgument(format!(
            "unknown sport event '{sport}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_parse_roundtrips_labels() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::parse(dim.label()).unwrap(), dim);
        }
        assert!(Dimension::parse("Score").is_err());
    }

    #[test]
    fn word_frequencies_fold_case_and_punctuation() {
        let counts = word_frequencies("Great energy, great atmosphere!");
        assert_eq!(counts[0], ("great".to_string(), 2));
        assert!(counts.contains(&("atmosphere".to_string(), 1)));
        assert!(counts.contains(&("energy".to_string(), 1)));
    }

    #[test]
    fn word_frequencies_of_empty_blob_is_empty() {
        assert!(word_frequencies("").is_empty());
        assert!(word_frequencies("   ").is_empty());
    }

    #[test]
    fn ties_break_alphabetically() {
        let counts = word_frequencies("beta alpha");
        assert_eq!(counts[0].0, "alpha");
        assert_eq!(counts[1].0, "beta");
    }
}
