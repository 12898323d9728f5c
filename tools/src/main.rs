//! feedback-report: headless report runner for the sports event
//! feedback dataset.
//!
//! Usage:
//!   feedback-report --participants 300 --days 5
//!   feedback-report --csv feedback.csv --seed 42
//!   feedback-report --csv feedback.csv --regenerate
//!   feedback-report --sport Tennis --json

use anyhow::Result;
use feedback_core::{
    aggregate::{self, Dimension, FrequencySummary, SatisfactionRow},
    cache,
    generator::{GeneratorParams, DEFAULT_NUM_DAYS, DEFAULT_NUM_PARTICIPANTS},
    rng::DatasetRng,
    session::FeedbackSession,
};
use std::env;
use std::path::Path;

/// Everything an external UI needs to render one dashboard view.
#[derive(serde::Serialize)]
struct ReportState {
    rows: usize,
    participants: usize,
    days: u32,
    participation: Vec<FrequencySummary>,
    satisfaction: Vec<SatisfactionRow>,
    feedback_sport: Option<String>,
    feedback_words: Vec<(String, u64)>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let participants = parse_arg(&args, "--participants", DEFAULT_NUM_PARTICIPANTS);
    let days = parse_arg(&args, "--days", DEFAULT_NUM_DAYS);
    let seed: Option<u64> = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok());
    let csv = args
        .windows(2)
        .find(|w| w[0] == "--csv")
        .map(|w| w[1].clone());
    let sport_flag = args
        .windows(2)
        .find(|w| w[0] == "--sport")
        .map(|w| w[1].clone());
    let regenerate = args.iter().any(|a| a == "--regenerate");
    let json_mode = args.iter().any(|a| a == "--json");

    let params = GeneratorParams {
        num_participants: participants,
        num_days: days,
    };
    let rng = match seed {
        Some(s) => DatasetRng::from_seed(s),
        None => DatasetRng::from_entropy(),
    };

    let session = match &csv {
        Some(path) if !regenerate => {
            FeedbackSession::from_cache_or_generate(Path::new(path), params, rng)?
        }
        _ => FeedbackSession::generate(params, rng)?,
    };
    if regenerate {
        if let Some(path) = &csv {
            cache::save_csv(session.table(), Path::new(path))?;
        }
    }
    log::info!("dataset ready: {} rows", session.table().len());

    let state = build_report_state(&session, sport_flag)?;
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_report(&state);
    }
    Ok(())
}

fn build_report_state(session: &FeedbackSession, sport_flag: Option<String>) -> Result<ReportState> {
    let participation = Dimension::ALL
        .iter()
        .map(|d| session.participation(*d))
        .collect();

    // Default comparison: the first three sports present, the same
    // default selection an interactive dashboard starts with.
    let present = session.sport_events_present();
    let compare: Vec<&str> = present.iter().take(3).map(String::as_str).collect();
    let satisfaction = session.satisfaction_comparison(&compare)?;

    let feedback_sport = sport_flag.or_else(|| present.first().cloned());
    let feedback_words = match &feedback_sport {
        Some(sport) => {
            let blob = session.feedback_blob(sport)?;
            aggregate::word_frequencies(&blob)
        }
        None => Vec::new(),
    };

    Ok(ReportState {
        rows: session.table().len(),
        participants: session.table().participant_count(),
        days: session.params().num_days,
        participation,
        satisfaction,
        feedback_sport,
        feedback_words,
    })
}

fn print_report(state: &ReportState) {
    println!("=== DATASET OVERVIEW ===");
    println!("  rows:         {}", state.rows);
    println!("  participants: {}", state.participants);
    println!("  days:         {}", state.days);

    for summary in &state.participation {
        println!();
        println!("=== PARTICIPATION BY {} ===", summary.dimension.to_uppercase());
        if summary.rows.is_empty() {
            println!("  (no data)");
        }
        for row in &summary.rows {
            println!("  {:<24} {}", row.category, row.count);
        }
    }

    println!();
    println!("=== MEAN SATISFACTION (FIRST 3 SPORTS) ===");
    if state.satisfaction.is_empty() {
        println!("  (no data)");
    }
    for row in &state.satisfaction {
        println!("  {:<24} {:.2}", row.sport_event, row.mean_satisfaction);
    }

    println!();
    match &state.feedback_sport {
        Some(sport) => {
            println!("=== FEEDBACK WORDS: {sport} ===");
            if state.feedback_words.is_empty() {
                println!("  (no feedback for this sport)");
            }
            for (word, count) in state.feedback_words.iter().take(10) {
                println!("  {:<16} {}", word, count);
            }
        }
        None => println!("=== FEEDBACK WORDS: (no data) ==="),
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
