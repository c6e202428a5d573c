//! # vatrates
//!
//! Reports on EU VAT rates: import a delimited rate table, then split the
//! countries by whether their standard rate exceeds a threshold.
//!
//! All rates use [`rust_decimal::Decimal`], never floating point, so a
//! rate equal to the threshold is never counted as above it.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//! use vatrates::core::*;
//! use rust_decimal_macros::dec;
//!
//! let table = "AT\tAustria\t20\t10\tfalse\nHU\tHungary\t27\t18\tfalse\nLU\tLuxembourg\t17\t8\ttrue\n";
//! let countries = import_from_reader(table.as_bytes(), Path::new("inline"), '\t', &DecimalCodec::default()).unwrap();
//!
//! let split = partition(&countries, dec!(15));
//! assert_eq!(split.above.len(), 2);
//! assert_eq!(split.other[0].code, "LU");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country records, decimal codec, import, classification, ordering |
//! | `report` (default) | Report text, pipeline driver, console and file sinks |
//! | `cli` | The `vatrates` command-line program |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "report")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
