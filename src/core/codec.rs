//! Locale-aware decimal and boolean text conversion.
//!
//! One [`DecimalCodec`] is used both for reading rates from the input table
//! and for echoing rates and thresholds back to the user, so whatever the
//! codec renders it can also parse.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal separator of the Czech locale the rate tables are written in.
pub const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Converts between exact decimals and their locale text form.
///
/// Accepted input is `[-]digits[<separator>digits]`, surrounded by optional
/// whitespace. A `+` sign, exponents, digit grouping and any separator other
/// than the configured one are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalCodec {
    separator: char,
}

impl Default for DecimalCodec {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMAL_SEPARATOR)
    }
}

impl DecimalCodec {
    /// Create a codec for the given decimal separator.
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// The configured decimal separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse a decimal such as `21`, `5,5` or `-1,5`.
    ///
    /// Negative values are accepted so every rendered value parses back;
    /// callers that need a non-negative rate check the sign themselves.
    /// On failure returns a short reason suitable for an error message.
    pub fn parse_decimal(&self, text: &str) -> Result<Decimal, String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err("empty number".into());
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (int_part, frac_part) = match unsigned.split_once(self.separator) {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        if int_part.is_empty() {
            return Err(format!("missing integer part in '{trimmed}'"));
        }
        if !int_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("not a decimal number: '{trimmed}'"));
        }
        if let Some(frac) = frac_part {
            if frac.is_empty() {
                return Err(format!("missing digits after '{}' in '{trimmed}'", self.separator));
            }
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("not a decimal number: '{trimmed}'"));
            }
        }

        let sign = if negative { "-" } else { "" };
        let canonical = match frac_part {
            Some(frac) => format!("{sign}{int_part}.{frac}"),
            None => format!("{sign}{int_part}"),
        };
        Decimal::from_str_exact(&canonical).map_err(|e| format!("'{trimmed}' out of range: {e}"))
    }

    /// Render a decimal with the configured separator and no trailing zeros.
    pub fn format_decimal(&self, value: Decimal) -> String {
        let plain = value.normalize().to_string();
        if self.separator == '.' {
            plain
        } else {
            plain.replace('.', &self.separator.to_string())
        }
    }

    /// Parse a `true`/`false` token (ASCII case-insensitive).
    pub fn parse_bool(&self, text: &str) -> Result<bool, String> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("expected 'true' or 'false', found '{trimmed}'"))
        }
    }
}
