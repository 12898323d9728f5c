//! Synthetic dataset generation.
//!
//! One call builds the whole table: identity fields are drawn once
//! per participant, per-day fields are redrawn for each of that
//! participant's rows. The table always has exactly
//! `num_participants * num_days` rows, participant-major with days
//! ascending.

use crate::{
    error::{FeedbackError, FeedbackResult},
    rng::DatasetRng,
    table::{FeedbackRecord, FeedbackTable},
    vocab::{self, Vocabulary},
};

pub const DEFAULT_NUM_PARTICIPANTS: u32 = 300;
pub const DEFAULT_NUM_DAYS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    pub num_participants: u32,
    pub num_days: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            num_participants: DEFAULT_NUM_PARTICIPANTS,
            num_days: DEFAULT_NUM_DAYS,
        }
    }
}

impl GeneratorParams {
    fn validate(&self) -> FeedbackResult<()> {
        if self.num_participants == 0 {
            return Err(FeedbackError::InvalidArgument(
                "num_participants must be positive".into(),
            ));
        }
        if self.num_days == 0 {
            return Err(FeedbackError::InvalidArgument(
                "num_days must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Generate a fresh feedback table.
pub fn generate(params: GeneratorParams, rng: &mut DatasetRng) -> FeedbackResult<FeedbackTable> {
    params.validate()?;

    let expected_rows = params.num_participants as usize * params.num_days as usize;
    let mut table = FeedbackTable::with_capacity(expected_rows);

    for _ in 0..params.num_participants {
        let participant_id = format!("P{}", rng.int_in(1000, 9999));
        let name = format!("Participant_{}", rng.int_in(1, 1000));
        let age = rng.int_in(vocab::AGE_MIN, vocab::AGE_MAX);
        let gender = (*rng.pick(Vocabulary::genders())).to_string();

        for day in 1..=params.num_days {
            // College and state are redrawn for every row, not fixed
            // per participant. The pair itself stays consistent.
            let (college, state) = *rng.pick(Vocabulary::colleges());

            table.push(FeedbackRecord {
                participant_id: participant_id.clone(),
                name: name.clone(),
                age,
                gender: gender.clone(),
                day,
                sport_event: (*rng.pick(Vocabulary::sport_events())).to_string(),
                score: rng.int_in(vocab::SCORE_MIN, vocab::SCORE_MAX),
                college: college.to_string(),
                state: state.to_string(),
                satisfaction_rating: rng.int_in(vocab::SATISFACTION_MIN, vocab::SATISFACTION_MAX),
                feedback: (*rng.pick(Vocabulary::feedback_samples())).to_string(),
            });
        }
    }

    log::info!(
        "generated {} feedback rows ({} participants x {} days)",
        table.len(),
        params.num_participants,
        params.num_days
    );
    Ok(table)
}
