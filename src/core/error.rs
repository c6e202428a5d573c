use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while importing a rate table or producing a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VatRatesError {
    /// The input source could not be opened or read.
    #[error("cannot read source '{}': {source}", .path.display())]
    SourceUnavailable {
        /// Path of the source that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line of the input could not be parsed into a country record.
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),

    /// An operation that needs at least one country received none.
    #[error("dataset contains no countries")]
    EmptyDataset,

    /// A report destination could not be written.
    #[error("cannot write report to '{target}': {source}")]
    SinkWrite {
        /// Human-readable name of the destination (file path or stream).
        target: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Threshold text supplied by a caller is not a valid decimal.
    #[error("invalid threshold '{input}': {reason}")]
    InvalidThreshold {
        /// The rejected input, verbatim.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// The configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A single line that failed to parse into a [`Country`](super::Country).
///
/// The record parser produces it without a line number; dataset import
/// attaches the 1-based line via [`MalformedRecord::at_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line number within the source, when known.
    pub line: Option<u64>,
    /// Name of the offending field (e.g. "vat_standard"), when known.
    pub field: Option<&'static str>,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed record")?;
        if let Some(field) = self.field {
            write!(f, " ({field})")?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(line) = self.line {
            write!(f, ", line {line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MalformedRecord {}

impl MalformedRecord {
    /// Create an error that is not tied to a particular field.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line: None,
            field: None,
            message: message.into(),
        }
    }

    /// Create an error for a named field.
    pub fn for_field(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            line: None,
            field: Some(field),
            message: message.into(),
        }
    }

    /// Attach the 1-based line number the record came from.
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}
