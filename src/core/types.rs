use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codec::DecimalCodec;
use super::error::MalformedRecord;

/// One row of the VAT rate table.
///
/// Equality is by value over all five fields, so two identical rows read
/// from different lines compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    /// Short alphabetic identifier (e.g. "AT"). Not required to be unique.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Standard VAT rate in percent (21 means 21 %). Never negative in a
    /// record built by [`Country::try_new`] or the record parser.
    pub vat_standard: Decimal,
    /// Reduced VAT rate in percent. Same sign rule as `vat_standard`.
    pub vat_reduced: Decimal,
    /// The country uses a special VAT regime and never counts as "above".
    pub has_special_regime: bool,
}

impl Country {
    /// Create a country record without checking the rates.
    ///
    /// Use [`Country::try_new`] for values that come from outside the
    /// program.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        vat_standard: Decimal,
        vat_reduced: Decimal,
        has_special_regime: bool,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            vat_standard,
            vat_reduced,
            has_special_regime,
        }
    }

    /// Create a country record, rejecting negative rates.
    ///
    /// The error names the offending field (`vat_standard` or
    /// `vat_reduced`). A negative zero counts as negative.
    pub fn try_new(
        code: impl Into<String>,
        name: impl Into<String>,
        vat_standard: Decimal,
        vat_reduced: Decimal,
        has_special_regime: bool,
    ) -> Result<Self, MalformedRecord> {
        for (field, rate) in [("vat_standard", vat_standard), ("vat_reduced", vat_reduced)] {
            if rate.is_sign_negative() {
                return Err(MalformedRecord::for_field(
                    field,
                    format!("rate must not be negative, found {rate}"),
                ));
            }
        }
        Ok(Self::new(code, name, vat_standard, vat_reduced, has_special_regime))
    }

    /// Compact description: `Austria (AT): 20 %`.
    pub fn description(&self, codec: &DecimalCodec) -> String {
        format!(
            "{} ({}): {} %",
            self.name,
            self.code,
            codec.format_decimal(self.vat_standard)
        )
    }

    /// Compact description followed by the reduced rate: `France (FR): 20 % (5,5 %)`.
    pub fn description_verbose(&self, codec: &DecimalCodec) -> String {
        format!(
            "{} ({} %)",
            self.description(codec),
            codec.format_decimal(self.vat_reduced)
        )
    }
}
