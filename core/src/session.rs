//! Session-scoped dataset state.
//!
//! A FeedbackSession owns the current table, the generator
//! parameters, and the RNG. Interactive front ends hold one session
//! per user; "regenerate" replaces the table wholesale. No
//! process-wide mutable storage.

use crate::{
    aggregate::{self, Dimension, FrequencySummary, SatisfactionRow},
    cache,
    error::FeedbackResult,
    generator::{self, GeneratorParams},
    rng::DatasetRng,
    table::FeedbackTable,
};
use std::path::Path;

pub struct FeedbackSession {
    params: GeneratorParams,
    rng: DatasetRng,
    table: FeedbackTable,
}

impl FeedbackSession {
    /// Start a session with a freshly generated table.
    pub fn generate(params: GeneratorParams, mut rng: DatasetRng) -> FeedbackResult<Self> {
        let table = generator::generate(params, &mut rng)?;
        Ok(Self { params, rng, table })
    }

    /// Start a session from the CSV cache at `path`, generating (and
    /// writing the cache) when the file is missing.
    pub fn from_cache_or_generate(
        path: &Path,
        params: GeneratorParams,
        mut rng: DatasetRng,
    ) -> FeedbackResult<Self> {
        let table = cache::load_or_generate(path, params, &mut rng)?;
        Ok(Self { params, rng, table })
    }

    /// Replace the held table with a freshly generated one. No merge,
    /// no migration.
    pub fn regenerate(&mut self) -> FeedbackResult<()> {
        self.table = generator::generate(self.params, &mut self.rng)?;
        Ok(())
    }

    pub fn table(&self) -> &FeedbackTable {
        &self.table
    }

    pub fn params(&self) -> GeneratorParams {
        self.params
    }

    pub fn sport_events_present(&self) -> Vec<String> {
        self.table.sport_events_present()
    }

    /// Frequency counts by `dimension` over the current table.
    pub fn participation(&self, dimension: Dimension) -> FrequencySummary {
        aggregate::frequency(&self.table, dimension)
    }

    /// Mean satisfaction per sport over `sports`.
    pub fn satisfaction_comparison(&self, sports: &[&str]) -> FeedbackResult<Vec<SatisfactionRow>> {
        aggregate::satisfaction_by_sport(&self.table, sports)
    }

    /// Space-joined feedback blob for one sport.
    pub fn feedback_blob(&self, sport: &str) -> FeedbackResult<String> {
        aggregate::feedback_for_sport(&self.table, sport)
    }
}
