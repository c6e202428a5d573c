//! Report text: headings, country lines and the "other countries" summary.
//!
//! Report wording is Czech, matching the locale the rate tables use.

use rust_decimal::Decimal;

use crate::core::{Country, DecimalCodec};

/// Line opening the "other countries" summary block.
pub const SUMMARY_SEPARATOR: &str = "====================";

/// Line closing each console task.
pub const TASK_SEPARATOR: &str = "--------------------";

/// Title printed once before the console listings.
pub const TITLE: &str = "Třídění států EU podle DPH/VAT";

/// Heading of the listing of every country in file order.
pub const ALL_HEADING: &str = "Vypiš všechny země:";

/// Which threshold listing a heading introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Countries above the threshold in file order.
    Above,
    /// Countries above the threshold, highest rate first.
    AboveDescending,
    /// Descending listing plus other codes, computed by filter and subtract.
    TwoPass,
    /// Descending listing plus other codes, computed in one pass.
    OnePass,
}

impl Heading {
    /// The heading sentence, echoing `threshold` in locale form.
    pub fn render(self, threshold: Decimal, codec: &DecimalCodec) -> String {
        let limit = codec.format_decimal(threshold);
        match self {
            Self::Above => {
                format!("Vypiš země s DPH vyšší než {limit} % a bez speciální sazby daně:")
            }
            Self::AboveDescending => format!(
                "Vypiš země s DPH vyšší než {limit} % a bez speciální sazby daně, sestupně:"
            ),
            Self::TwoPass => format!(
                "Vypiš země s DPH vyšší než {limit} % a bez speciální sazby daně, sestupně, \
                 seznam zkratek, které ve výpisu nefigurují, vzestupně:"
            ),
            Self::OnePass => format!(
                "Vypiš země s DPH vyšší než {limit} % a bez speciální sazby daně, sestupně, \
                 seznam zkratek, které ve výpisu nefigurují, vzestupně, \
                 státy rozděleny na 1 průchod:"
            ),
        }
    }
}

/// Compact lines, one per country.
pub fn compact_lines(countries: &[Country], codec: &DecimalCodec) -> Vec<String> {
    countries.iter().map(|c| c.description(codec)).collect()
}

/// Verbose lines (with reduced rate), one per country.
pub fn verbose_lines(countries: &[Country], codec: &DecimalCodec) -> Vec<String> {
    countries.iter().map(|c| c.description_verbose(codec)).collect()
}

/// The "other countries" block: separator, threshold sentence, joined codes.
///
/// Codes appear in the order given; callers pass them sorted by code.
pub fn others_summary(others: &[Country], threshold: Decimal, codec: &DecimalCodec) -> String {
    let codes: Vec<&str> = others.iter().map(|c| c.code.as_str()).collect();
    format!(
        "{SUMMARY_SEPARATOR}\nSazba VAT {} % nebo nižší nebo používají speciální sazbu: {}",
        codec.format_decimal(threshold),
        codes.join(", ")
    )
}
