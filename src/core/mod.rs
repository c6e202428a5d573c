//! Country records, rate table import, and threshold classification.
//!
//! Everything in this module is pure apart from reading the input file:
//! records are parsed once, then filtered, partitioned and sorted into new
//! sequences without touching the imported dataset.

mod codec;
mod config;
mod error;
mod import;
mod ordering;
mod parser;
mod partition;
mod store;
mod types;

pub use codec::*;
pub use config::*;
pub use error::*;
pub use import::*;
pub use ordering::*;
pub use parser::*;
pub use partition::*;
pub use store::*;
pub use types::*;
