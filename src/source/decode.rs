//! Record decoding from JSON text.
//!
//! Two layouts are accepted: a single JSON array of objects, or JSON Lines
//! with one object per line.

use crate::model::error::InputError;
use crate::model::Record;
use serde_json::Value as Json;
use tracing::{debug, warn};

/// Records decoded from one input, plus the JSON Lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    /// Malformed or non-object lines skipped (JSON Lines only).
    pub skipped: usize,
}

/// Decode records, choosing the layout from the first non-blank character.
///
/// # Errors
///
/// An array document that fails to parse, or that contains a non-object
/// element, is rejected outright. JSON Lines never fail: bad lines are
/// skipped and counted.
pub fn parse_records(text: &str) -> Result<LoadedRecords, InputError> {
    if text.trim_start().starts_with('[') {
        parse_array(text)
    } else {
        Ok(parse_lines(text))
    }
}

fn parse_array(text: &str) -> Result<LoadedRecords, InputError> {
    let elements: Vec<Json> = serde_json::from_str(text).map_err(|e| InputError::Json {
        line: e.line(),
        reason: e.to_string(),
    })?;

    let records = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Json::Object(map) => Ok(Record::from(map)),
            _ => Err(InputError::NotARecord { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = records.len(), "Decoded JSON array");
    Ok(LoadedRecords {
        records,
        skipped: 0,
    })
}

fn parse_lines(text: &str) -> LoadedRecords {
    let mut loaded = LoadedRecords::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Json>(line) {
            Ok(Json::Object(map)) => loaded.records.push(Record::from(map)),
            Ok(_) => {
                warn!(line = index + 1, "Skipping JSON line that is not an object");
                loaded.skipped += 1;
            }
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping malformed JSON line");
                loaded.skipped += 1;
            }
        }
    }

    debug!(
        count = loaded.records.len(),
        skipped = loaded.skipped,
        "Decoded JSON Lines"
    );
    loaded
}
