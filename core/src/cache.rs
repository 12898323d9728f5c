//! Flat CSV cache for the feedback table.
//!
//! Comma-delimited, header row first, one line per record. The
//! vocabulary strings contain no commas, so fields are written
//! unquoted. A missing cache file is the fallback path, not an
//! error: the caller regenerates instead.

use crate::{
    error::{FeedbackError, FeedbackResult},
    generator::{self, GeneratorParams},
    rng::DatasetRng,
    table::{FeedbackRecord, FeedbackTable, COLUMNS},
};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write the table to `path`, replacing any existing file.
pub fn save_csv(table: &FeedbackTable, path: &Path) -> FeedbackResult<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", COLUMNS.join(","))?;
    for r in table.rows() {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{}",
            r.participant_id,
            r.name,
            r.age,
            r.gender,
            r.day,
            r.sport_event,
            r.score,
            r.college,
            r.state,
            r.satisfaction_rating,
            r.feedback,
        )?;
    }
    out.flush()?;

    log::info!("saved {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Read a table back from `path`, validating the header and every
/// field count.
pub fn load_csv(path: &Path) -> FeedbackResult<FeedbackTable> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .ok_or_else(|| FeedbackError::MalformedCache("file is empty".into()))??;
    let expected = COLUMNS.join(",");
    if header != expected {
        return Err(FeedbackError::MalformedCache(format!(
            "unexpected header '{header}'"
        )));
    }

    let mut table = FeedbackTable::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Header is line 1, so data line `idx` is file line idx + 2.
        let line_no = idx + 2;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != COLUMNS.len() {
            return Err(FeedbackError::MalformedCache(format!(
                "line {line_no}: expected {} fields, got {}",
                COLUMNS.len(),
                fields.len()
            )));
        }

        table.push(FeedbackRecord {
            participant_id: fields[0].to_string(),
            name: fields[1].to_string(),
            age: parse_int(fields[2], line_no, "Age")?,
            gender: fields[3].to_string(),
            day: parse_int(fields[4], line_no, "Day")?,
            sport_event: fields[5].to_string(),
            score: parse_int(fields[6], line_no, "Score")?,
            college: fields[7].to_string(),
            state: fields[8].to_string(),
            satisfaction_rating: parse_int(fields[9], line_no, "Satisfaction_Rating")?,
            feedback: fields[10].to_string(),
        });
    }

    log::info!("loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Load the cached table if `path` exists; otherwise generate a fresh
/// one, write it to `path`, and return it.
pub fn load_or_generate(
    path: &Path,
    params: GeneratorParams,
    rng: &mut DatasetRng,
) -> FeedbackResult<FeedbackTable> {
    if path.exists() {
        return load_csv(path);
    }

    log::info!("no cache at {}, generating", path.display());
    let table = generator::generate(params, rng)?;
    save_csv(&table, path)?;
    Ok(table)
}

fn parse_int(field: &str, line_no: usize, column: &str) -> FeedbackResult<u32> {
    field.parse().map_err(|_| {
        FeedbackError::MalformedCache(format!("line {line_no}: bad {column} value '{field}'"))
    })
}
