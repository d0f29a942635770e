//! Error types for the tabview shell.
//!
//! The view engine itself is total: every query operation succeeds for any
//! input shape. Failures only arise at the edges, when reading records,
//! loading configuration, installing the log subscriber or driving the
//! terminal. Each edge gets its own `thiserror` enum and all of them fold
//! into [`AppError`] through `From`, so `?` composes across layers.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`InputError`] - Record file/stdin reading and decoding failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`ColumnError`](crate::model::ColumnError) - Invalid column sets
//!   - [`LoggingError`](crate::logging::LoggingError) - Subscriber setup
//!   - `std::io::Error` - Terminal failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::ColumnError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// All variants are fatal for the binary: they are reported on stderr and
/// the process exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read or decode input records.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configured columns do not form a valid column set.
    #[error("Invalid columns: {0}")]
    Column(#[from] ColumnError),

    /// Log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or stdout failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading records from a file or stdin.
///
/// Individual malformed JSON Lines are not errors: they are skipped and
/// logged. These variants cover failures that leave no usable record set.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given record file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tabview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No file argument and stdin is an interactive terminal.
    #[error("No input: pass a file path or pipe records on stdin")]
    NoInput,

    /// A JSON array document failed to parse.
    #[error("Invalid JSON at line {line}: {reason}")]
    Json {
        /// 1-based line reported by the decoder.
        line: usize,
        /// Decoder message.
        reason: String,
    },

    /// A JSON array contained an element that is not an object.
    #[error("Element {index} of the record array is not an object")]
    NotARecord {
        /// 0-based array index of the offending element.
        index: usize,
    },

    /// Generic I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
