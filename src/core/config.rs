use std::path::PathBuf;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::codec::{DEFAULT_DECIMAL_SEPARATOR, DecimalCodec};
use super::error::VatRatesError;

/// Threshold used when the caller does not supply one.
pub const DEFAULT_THRESHOLD: Decimal = dec!(20);

/// Field delimiter of the rate table.
pub const DEFAULT_DELIMITER: char = '\t';

/// Settings for one import-and-report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatRatesConfig {
    /// Character separating the five fields of a record.
    pub delimiter: char,
    /// Decimal separator used for parsing rates and rendering numbers.
    pub decimal_separator: char,
    /// Threshold applied when none is given explicitly.
    pub default_threshold: Decimal,
    /// Rate table to import.
    pub input_path: PathBuf,
    /// Directory report files are written into.
    pub output_dir: PathBuf,
    /// File name prefix of exported reports, followed by the threshold.
    pub report_prefix: String,
}

impl Default for VatRatesConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            default_threshold: DEFAULT_THRESHOLD,
            input_path: PathBuf::from("res").join("vat-eu.csv"),
            output_dir: PathBuf::from("res"),
            report_prefix: "vat-over-".into(),
        }
    }
}

impl VatRatesConfig {
    /// The codec shared by parsing and rendering.
    pub fn codec(&self) -> DecimalCodec {
        DecimalCodec::new(self.decimal_separator)
    }

    /// Check that the delimiter and decimal separator can be told apart.
    ///
    /// The delimiter must differ from the decimal separator, and the decimal
    /// separator must not be a digit, a sign or whitespace.
    pub fn validate(&self) -> Result<(), VatRatesError> {
        if self.delimiter == self.decimal_separator {
            return Err(VatRatesError::InvalidConfig(format!(
                "delimiter and decimal separator are both '{}'",
                self.decimal_separator.escape_default()
            )));
        }
        let sep = self.decimal_separator;
        if sep.is_ascii_digit() || sep == '-' || sep == '+' || sep.is_whitespace() {
            return Err(VatRatesError::InvalidConfig(format!(
                "'{}' cannot be a decimal separator",
                sep.escape_default()
            )));
        }
        Ok(())
    }

    /// Destination of the report for `threshold`, e.g. `res/vat-over-20.txt`.
    ///
    /// The threshold appears in plain normalized form (`20`, `20.5`) so
    /// reports for different thresholds never overwrite each other.
    pub fn report_path(&self, threshold: Decimal) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.txt", self.report_prefix, threshold.normalize()))
    }
}

/// Builder for [`VatRatesConfig`].
///
/// # Example
///
/// ```
/// use vatrates::core::VatRatesConfigBuilder;
///
/// let config = VatRatesConfigBuilder::new()
///     .delimiter(';')
///     .output_dir("out")
///     .build()
///     .unwrap();
/// assert_eq!(config.delimiter, ';');
///
/// // A table whose delimiter is also its decimal separator cannot be read.
/// assert!(VatRatesConfigBuilder::new().delimiter(',').build().is_err());
/// ```
#[derive(Debug, Default)]
pub struct VatRatesConfigBuilder {
    config: VatRatesConfig,
}

impl VatRatesConfigBuilder {
    /// Start from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the decimal separator.
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    /// Set the fallback threshold.
    pub fn default_threshold(mut self, threshold: Decimal) -> Self {
        self.config.default_threshold = threshold;
        self
    }

    /// Set the rate table path.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Set the report output directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the report file name prefix.
    pub fn report_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.report_prefix = prefix.into();
        self
    }

    /// Build the configuration, rejecting inconsistent separators.
    ///
    /// See [`VatRatesConfig::validate`].
    pub fn build(self) -> Result<VatRatesConfig, VatRatesError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
