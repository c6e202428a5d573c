//! Report destinations.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::VatRatesError;

/// Somewhere a rendered report can be written.
///
/// Console and file destinations receive the same text byte for byte.
pub trait ReportSink {
    /// Write the complete report text.
    fn write_report(&mut self, report: &str) -> Result<(), VatRatesError>;
}

/// Sink over any [`Write`] (stdout, a buffer in tests).
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    target: String,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `writer`; `target` names it in error messages.
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer,
            target: target.into(),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn write_report(&mut self, report: &str) -> Result<(), VatRatesError> {
        self.writer
            .write_all(report.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|source| VatRatesError::SinkWrite {
                target: self.target.clone(),
                source,
            })
    }
}

/// Sink writing each report into a file, created or truncated per write.
///
/// The file is only open for the duration of [`ReportSink::write_report`].
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, report: &str) -> Result<(), VatRatesError> {
        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            writer.write_all(report.as_bytes())?;
            writer.flush()
        };
        write().map_err(|source| VatRatesError::SinkWrite {
            target: self.path.display().to_string(),
            source,
        })
    }
}
