//! End-to-end compositions: import, classify, order, render.

use std::path::PathBuf;

use rust_decimal::Decimal;

use super::format::{
    ALL_HEADING, Heading, TASK_SEPARATOR, TITLE, compact_lines, others_summary, verbose_lines,
};
use super::sink::{FileSink, ReportSink};
use crate::core::{
    Country, CountryStore, DecimalCodec, VatRatesConfig, VatRatesError, filter_above, partition,
    sort_by_code, sort_by_vat_standard_desc, subtract,
};

/// A heading followed by one line per country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Heading sentence.
    pub heading: String,
    /// Country lines.
    pub lines: Vec<String>,
}

impl Listing {
    /// Heading and lines, each terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.heading);
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Above countries (highest rate first) and the remaining countries (by code).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdReport {
    /// Threshold the report was produced for.
    pub threshold: Decimal,
    /// Above-threshold countries, descending by standard rate.
    pub above: Vec<Country>,
    /// All other countries, ascending by code.
    pub others: Vec<Country>,
}

impl ThresholdReport {
    /// Verbose line per above country, then the others summary.
    ///
    /// This exact text goes to the console and to report files alike.
    pub fn render(&self, codec: &DecimalCodec) -> String {
        let mut out = String::new();
        for line in verbose_lines(&self.above, codec) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&others_summary(&self.others, self.threshold, codec));
        out.push('\n');
        out
    }
}

/// Runs the report pipeline under one immutable configuration.
#[derive(Debug, Clone)]
pub struct ReportDriver {
    config: VatRatesConfig,
    codec: DecimalCodec,
}

impl ReportDriver {
    /// Create a driver for `config`.
    pub fn new(config: VatRatesConfig) -> Self {
        let codec = config.codec();
        Self { config, codec }
    }

    /// The configuration this driver was built with.
    pub fn config(&self) -> &VatRatesConfig {
        &self.config
    }

    /// The codec used for all parsing and rendering.
    pub fn codec(&self) -> &DecimalCodec {
        &self.codec
    }

    /// Import the configured rate table.
    pub fn load(&self) -> Result<CountryStore, VatRatesError> {
        CountryStore::from_file(&self.config.input_path, self.config.delimiter, &self.codec)
    }

    /// Resolve caller-supplied threshold text.
    ///
    /// `None` or blank text selects the configured default.
    pub fn resolve_threshold(&self, input: Option<&str>) -> Result<Decimal, VatRatesError> {
        match input {
            None => Ok(self.config.default_threshold),
            Some(text) if text.trim().is_empty() => Ok(self.config.default_threshold),
            Some(text) => {
                self.codec
                    .parse_decimal(text)
                    .map_err(|reason| VatRatesError::InvalidThreshold {
                        input: text.to_string(),
                        reason,
                    })
            }
        }
    }

    /// Every country in file order.
    pub fn list_all(&self, store: &CountryStore) -> Result<Listing, VatRatesError> {
        let countries = store.require_non_empty()?;
        Ok(Listing {
            heading: ALL_HEADING.to_string(),
            lines: compact_lines(countries, &self.codec),
        })
    }

    /// Above countries in file order.
    pub fn list_above(
        &self,
        store: &CountryStore,
        threshold: Decimal,
    ) -> Result<Listing, VatRatesError> {
        let countries = store.require_non_empty()?;
        let above = filter_above(countries, threshold);
        Ok(Listing {
            heading: Heading::Above.render(threshold, &self.codec),
            lines: compact_lines(&above, &self.codec),
        })
    }

    /// Above countries, highest standard rate first.
    pub fn list_above_descending(
        &self,
        store: &CountryStore,
        threshold: Decimal,
    ) -> Result<Listing, VatRatesError> {
        let countries = store.require_non_empty()?;
        let above = sort_by_vat_standard_desc(&filter_above(countries, threshold));
        Ok(Listing {
            heading: Heading::AboveDescending.render(threshold, &self.codec),
            lines: compact_lines(&above, &self.codec),
        })
    }

    /// Filter and sort the above group, then derive the others by subtraction.
    pub fn two_pass(
        &self,
        store: &CountryStore,
        threshold: Decimal,
    ) -> Result<ThresholdReport, VatRatesError> {
        let countries = store.require_non_empty()?;
        let above = sort_by_vat_standard_desc(&filter_above(countries, threshold));
        let others = sort_by_code(&subtract(countries, &above));
        Ok(ThresholdReport {
            threshold,
            above,
            others,
        })
    }

    /// Split the dataset once, then order each side.
    pub fn one_pass(
        &self,
        store: &CountryStore,
        threshold: Decimal,
    ) -> Result<ThresholdReport, VatRatesError> {
        let countries = store.require_non_empty()?;
        let split = partition(countries, threshold);
        Ok(ThresholdReport {
            threshold,
            above: sort_by_vat_standard_desc(&split.above),
            others: sort_by_code(&split.other),
        })
    }

    /// Render a report with this driver's codec.
    pub fn render(&self, report: &ThresholdReport) -> String {
        report.render(&self.codec)
    }

    /// Write the one-pass report for `threshold` to `sink`.
    pub fn write_report(
        &self,
        store: &CountryStore,
        threshold: Decimal,
        sink: &mut dyn ReportSink,
    ) -> Result<(), VatRatesError> {
        let report = self.one_pass(store, threshold)?;
        sink.write_report(&self.render(&report))
    }

    /// Export the one-pass report to the configured file for `threshold`.
    ///
    /// Returns the path written.
    pub fn export(&self, store: &CountryStore, threshold: Decimal) -> Result<PathBuf, VatRatesError> {
        let mut sink = FileSink::new(self.config.report_path(threshold));
        self.write_report(store, threshold, &mut sink)?;
        Ok(sink.path().to_path_buf())
    }

    /// Print `listing` followed by the task separator.
    pub fn print_listing(
        &self,
        listing: &Listing,
        sink: &mut dyn ReportSink,
    ) -> Result<(), VatRatesError> {
        sink.write_report(&listing.render())?;
        sink.write_report(&format!("{TASK_SEPARATOR}\n"))
    }

    /// Print the heading, the report for `threshold` and the task separator.
    ///
    /// `two_pass` selects filter-and-subtract over the single split.
    pub fn print_report(
        &self,
        store: &CountryStore,
        threshold: Decimal,
        two_pass: bool,
        sink: &mut dyn ReportSink,
    ) -> Result<(), VatRatesError> {
        let (heading, report) = if two_pass {
            (Heading::TwoPass, self.two_pass(store, threshold)?)
        } else {
            (Heading::OnePass, self.one_pass(store, threshold)?)
        };
        sink.write_report(&format!("{}\n", heading.render(threshold, &self.codec)))?;
        sink.write_report(&self.render(&report))?;
        sink.write_report(&format!("{TASK_SEPARATOR}\n"))
    }

    /// The full session for one threshold.
    ///
    /// Prints the title, every listing and both report shapes to `sink`,
    /// then exports the report file. Returns the exported path.
    pub fn run_session(
        &self,
        store: &CountryStore,
        threshold: Decimal,
        sink: &mut dyn ReportSink,
    ) -> Result<PathBuf, VatRatesError> {
        sink.write_report(&format!("{TITLE}\n"))?;
        self.print_listing(&self.list_all(store)?, sink)?;
        self.print_listing(&self.list_above(store, threshold)?, sink)?;
        self.print_listing(&self.list_above_descending(store, threshold)?, sink)?;
        self.print_report(store, threshold, true, sink)?;
        self.print_report(store, threshold, false, sink)?;
        self.export(store, threshold)
    }

    /// Follow-up for a threshold chosen after a session: the one-pass view
    /// for `threshold`, then its export.
    pub fn run_follow_up(
        &self,
        store: &CountryStore,
        threshold: Decimal,
        sink: &mut dyn ReportSink,
    ) -> Result<PathBuf, VatRatesError> {
        self.print_report(store, threshold, false, sink)?;
        self.export(store, threshold)
    }
}
