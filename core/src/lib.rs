//! feedback-core: synthetic sports-event feedback data and its
//! summary pipeline.
//!
//! The library has two halves:
//!   1. A dataset generator that synthesizes an 11-column feedback
//!      table (one row per participant per day) from fixed
//!      vocabularies and uniform random draws.
//!   2. An aggregator that reduces the table to the summaries a
//!      dashboard renders: frequency counts by dimension, mean
//!      satisfaction per sport, and a space-joined feedback blob for
//!      word-frequency display.
//!
//! Presentation (charts, word clouds) lives outside this crate; the
//! `feedback-report` binary in `tools/` is a headless front end that
//! prints the same summaries as text or JSON.

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod generator;
pub mod rng;
pub mod session;
pub mod table;
pub mod vocab;
