//! Fixed vocabularies and value ranges for the synthetic dataset.
//!
//! Every categorical field is drawn from one of these curated lists;
//! every numeric field is drawn uniformly from one of these inclusive
//! ranges. The lists are part of the dataset contract — tests assert
//! membership against them.

pub const AGE_MIN: u32 = 18;
pub const AGE_MAX: u32 = 26;
pub const SCORE_MIN: u32 = 1;
pub const SCORE_MAX: u32 = 100;
pub const SATISFACTION_MIN: u32 = 1;
pub const SATISFACTION_MAX: u32 = 5;

pub struct Vocabulary;

impl Vocabulary {
    /// The 10 sport events participants can be assigned on any day.
    pub fn sport_events() -> &'static [&'static str] {
        &[
            "Football",
            "Basketball",
            "Tennis",
            "Swimming",
            "Running",
            "Badminton",
            "Cycling",
            "Volleyball",
            "Table Tennis",
            "Archery",
        ]
    }

    pub fn genders() -> &'static [&'static str] {
        &["Male", "Female", "Other"]
    }

    /// The 6 (college, state) pairs. College and state always travel
    /// together; a row never mixes one pair's college with another's
    /// state.
    pub fn colleges() -> &'static [(&'static str, &'static str)] {
        &[
            ("College A", "Karnataka"),
            ("College B", "Karnataka"),
            ("College C", "Kerala"),
            ("College D", "Kerala"),
            ("College E", "Tamil Nadu"),
            ("College F", "Andhra Pradesh"),
        ]
    }

    /// The 10 canned free-text feedback strings.
    pub fn feedback_samples() -> &'static [&'static str] {
        &[
            "Had a great time!",
            "Could be better organized.",
            "Loved the experience!",
            "Facilities need improvement.",
            "Amazing competition!",
            "Looking forward to next time.",
            "Would love more variety in events.",
            "Great energy and atmosphere!",
            "Well managed but could use better timing.",
            "Enjoyed every moment!",
        ]
    }

    /// Whether `name` is one of the 10 sport events.
    pub fn is_sport_event(name: &str) -> bool {
        Self::sport_events().iter().any(|s| *s == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_sizes_match_contract() {
        assert_eq!(Vocabulary::sport_events().len(), 10);
        assert_eq!(Vocabulary::genders().len(), 3);
        assert_eq!(Vocabulary::colleges().len(), 6);
        assert_eq!(Vocabulary::feedback_samples().len(), 10);
    }

    #[test]
    fn sport_membership_check() {
        assert!(Vocabulary::is_sport_event("Archery"));
        assert!(!Vocabulary::is_sport_event("Quidditch"));
    }

    #[test]
    fn vocabulary_strings_contain_no_commas() {
        // The CSV cache writes fields unquoted.
        for s in Vocabulary::sport_events() {
            assert!(!s.contains(','));
        }
        for (c, st) in Vocabulary::colleges() {
            assert!(!c.contains(',') && !st.contains(','));
        }
        for f in Vocabulary::feedback_samples() {
            assert!(!f.contains(','), "feedback sample has a comma: {f}");
        }
    }
}
