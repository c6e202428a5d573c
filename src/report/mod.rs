//! Report rendering and export.
//!
//! # Example
//!
//! ```
//! use vatrates::core::*;
//! use vatrates::report::*;
//! use rust_decimal_macros::dec;
//!
//! let store = CountryStore::new(vec![
//!     Country::new("AT", "Austria", dec!(20), dec!(10), false),
//!     Country::new("HU", "Hungary", dec!(27), dec!(18), false),
//! ]);
//! let driver = ReportDriver::new(VatRatesConfig::default());
//! let report = driver.one_pass(&store, dec!(20)).unwrap();
//! assert_eq!(report.above[0].code, "HU");
//! assert!(driver.render(&report).ends_with("speciální sazbu: AT\n"));
//! ```

mod format;
mod pipeline;
mod sink;

pub use format::{
    ALL_HEADING, Heading, SUMMARY_SEPARATOR, TASK_SEPARATOR, TITLE, compact_lines, others_summary,
    verbose_lines,
};
pub use pipeline::{Listing, ReportDriver, ThresholdReport};
pub use sink::{FileSink, ReportSink, WriterSink};
