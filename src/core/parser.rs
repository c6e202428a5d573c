use super::codec::DecimalCodec;
use super::error::MalformedRecord;
use super::types::Country;

/// Number of fields in one record: code, name, standard, reduced, special.
pub const FIELD_COUNT: usize = 5;

/// Parse one line of the rate table into a [`Country`].
///
/// Fields are, in order: code, name, standard rate, reduced rate and the
/// special-regime flag. Rates use the codec's decimal separator and must not
/// be negative.
///
/// # Example
///
/// ```
/// use vatrates::core::{DecimalCodec, parse_country};
/// use rust_decimal_macros::dec;
///
/// let c = parse_country("FR\tFrance\t20\t5,5\tfalse", '\t', &DecimalCodec::default()).unwrap();
/// assert_eq!(c.vat_reduced, dec!(5.5));
/// ```
pub fn parse_country(
    line: &str,
    delimiter: char,
    codec: &DecimalCodec,
) -> Result<Country, MalformedRecord> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() != FIELD_COUNT {
        return Err(MalformedRecord::new(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        )));
    }

    let code = fields[0].trim();
    if code.is_empty() {
        return Err(MalformedRecord::for_field("code", "country code is empty"));
    }

    let vat_standard = codec
        .parse_decimal(fields[2])
        .map_err(|reason| MalformedRecord::for_field("vat_standard", reason))?;
    let vat_reduced = codec
        .parse_decimal(fields[3])
        .map_err(|reason| MalformedRecord::for_field("vat_reduced", reason))?;
    let has_special_regime = codec
        .parse_bool(fields[4])
        .map_err(|reason| MalformedRecord::for_field("has_special_regime", reason))?;

    Country::try_new(code, fields[1], vat_standard, vat_reduced, has_special_regime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse(line: &str) -> Result<Country, MalformedRecord> {
        parse_country(line, '\t', &DecimalCodec::default())
    }

    #[test]
    fn parses_full_record() {
        let c = parse("LU\tLuxembourg\t17\t8\ttrue").unwrap();
        assert_eq!(c, Country::new("LU", "Luxembourg", dec!(17), dec!(8), true));
    }

    #[test]
    fn name_may_contain_spaces() {
        let c = parse("CZ\tCzech Republic\t21\t15\tfalse").unwrap();
        assert_eq!(c.name, "Czech Republic");
    }

    #[test]
    fn custom_delimiter() {
        let c = parse_country("AT;Austria;20;10;false", ';', &DecimalCodec::default()).unwrap();
        assert_eq!(c.code, "AT");
        assert_eq!(c.vat_standard, dec!(20));
    }

    #[test]
    fn missing_boolean_field() {
        let e = parse("AT\tAustria\t20\t10").unwrap_err();
        assert!(e.message.contains("expected 5 fields, found 4"));
        assert_eq!(e.line, None);
    }

    #[test]
    fn extra_field_rejected() {
        assert!(parse("AT\tAustria\t20\t10\tfalse\tx").is_err());
    }

    #[test]
    fn empty_line_rejected() {
        assert!(parse("").is_err());
    }

    #[test]
    fn bad_standard_rate_names_field() {
        let e = parse("AT\tAustria\t20.5\t10\tfalse").unwrap_err();
        assert_eq!(e.field, Some("vat_standard"));
    }

    #[test]
    fn bad_reduced_rate_names_field() {
        let e = parse("AT\tAustria\t20\tten\tfalse").unwrap_err();
        assert_eq!(e.field, Some("vat_reduced"));
    }

    #[test]
    fn bad_flag_names_field() {
        let e = parse("AT\tAustria\t20\t10\tno").unwrap_err();
        assert_eq!(e.field, Some("has_special_regime"));
    }

    #[test]
    fn negative_rates_name_field() {
        let e = parse("AT\tAustria\t-20\t10\tfalse").unwrap_err();
        assert_eq!(e.field, Some("vat_standard"));
        assert!(e.message.contains("must not be negative"));

        let e = parse("AT\tAustria\t20\t-1,5\tfalse").unwrap_err();
        assert_eq!(e.field, Some("vat_reduced"));
    }

    #[test]
    fn empty_code_rejected() {
        let e = parse("\tAustria\t20\t10\tfalse").unwrap_err();
        assert_eq!(e.field, Some("code"));
    }
}
