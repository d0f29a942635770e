//! Record input sources.
//!
//! Records come from a file named on the command line or from piped stdin.
//! Both are read once, in full, before the view is built.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;

pub mod decode;

pub use decode::{parse_records, LoadedRecords};

/// Where records are read from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Read and decode every record from this source.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and decoding errors from
    /// [`parse_records`].
    pub fn load(&self) -> Result<LoadedRecords, InputError> {
        let text = match self {
            InputSource::File(path) => std::fs::read_to_string(path)?,
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().lock().read_to_string(&mut text)?;
                text
            }
        };

        let loaded = parse_records(&text)?;
        info!(
            source = ?self,
            records = loaded.records.len(),
            skipped = loaded.skipped,
            "Records loaded"
        );
        Ok(loaded)
    }
}

/// Detect the input source.
///
/// # Logic:
/// 1. If a file path is provided it must exist
/// 2. Else stdin must be piped
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if !path.exists() => Err(InputError::FileNotFound { path }),
        Some(path) => Ok(InputSource::File(path)),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}

/// Detect the source and load its records.
///
/// # Errors
///
/// See [`detect_input_source`] and [`InputSource::load`].
pub fn load_records(file: Option<PathBuf>) -> Result<LoadedRecords, InputError> {
    detect_input_source(file)?.load()
}
