//! Threshold classification of countries.
//!
//! A country is *above* a threshold when its standard rate is strictly
//! greater than the threshold and it has no special regime; every other
//! country is *other*. [`is_above`] is the only place this rule lives.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::types::Country;

/// Whether `country` belongs to the "above" group for `threshold`.
///
/// Exact decimal comparison: a rate equal to the threshold is not above.
pub fn is_above(country: &Country, threshold: Decimal) -> bool {
    country.vat_standard > threshold && !country.has_special_regime
}

/// The two complementary groups of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Countries above the threshold, in input order.
    pub above: Vec<Country>,
    /// All remaining countries, in input order.
    pub other: Vec<Country>,
}

/// Countries above `threshold`, in input order.
pub fn filter_above(countries: &[Country], threshold: Decimal) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| is_above(c, threshold))
        .cloned()
        .collect()
}

/// Countries of `countries` that are not (by value) in `removed`, in input order.
///
/// Duplicate records are all removed together, which agrees with the
/// one-pass split since identical records always classify identically.
pub fn subtract(countries: &[Country], removed: &[Country]) -> Vec<Country> {
    let removed: HashSet<&Country> = removed.iter().collect();
    countries
        .iter()
        .filter(|c| !removed.contains(c))
        .cloned()
        .collect()
}

/// Split `countries` into above/other in a single pass.
pub fn partition(countries: &[Country], threshold: Decimal) -> Partition {
    let (above, other): (Vec<Country>, Vec<Country>) = countries
        .iter()
        .cloned()
        .partition(|c| is_above(c, threshold));
    Partition { above, other }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dataset() -> Vec<Country> {
        vec![
            Country::new("AT", "Austria", dec!(20), dec!(10), false),
            Country::new("FR", "France", dec!(20), dec!(5.5), false),
            Country::new("HU", "Hungary", dec!(27), dec!(18), false),
            Country::new("DK", "Denmark", dec!(25), dec!(0), false),
        ]
    }

    fn codes(list: &[Country]) -> Vec<&str> {
        list.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn equal_rate_is_not_above() {
        let at = &dataset()[0];
        assert!(!is_above(at, dec!(20)));
        assert!(is_above(at, dec!(19.99)));
    }

    #[test]
    fn special_regime_never_above() {
        let lu = Country::new("LU", "Luxembourg", dec!(17), dec!(8), true);
        assert!(!is_above(&lu, dec!(0)));
    }

    #[test]
    fn one_pass_split() {
        let p = partition(&dataset(), dec!(20));
        assert_eq!(codes(&p.above), ["HU", "DK"]);
        assert_eq!(codes(&p.other), ["AT", "FR"]);
    }

    #[test]
    fn filter_then_subtract_matches_partition() {
        let data = dataset();
        let above = filter_above(&data, dec!(20));
        let other = subtract(&data, &above);
        let p = partition(&data, dec!(20));
        assert_eq!(above, p.above);
        assert_eq!(other, p.other);
    }

    #[test]
    fn duplicates_tolerated() {
        let mut data = dataset();
        data.push(data[2].clone());
        data.push(data[0].clone());
        let p = partition(&data, dec!(20));
        assert_eq!(codes(&p.above), ["HU", "DK", "HU"]);
        assert_eq!(codes(&p.other), ["AT", "FR", "AT"]);
        assert_eq!(subtract(&data, &filter_above(&data, dec!(20))), p.other);
    }

    #[test]
    fn empty_dataset_partitions_to_empty_groups() {
        assert_eq!(partition(&[], dec!(20)), Partition::default());
    }
}
