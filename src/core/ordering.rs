use super::types::Country;

/// Countries ordered by standard rate, highest first.
///
/// Stable: countries with equal rates keep their input order.
pub fn sort_by_vat_standard_desc(countries: &[Country]) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| b.vat_standard.cmp(&a.vat_standard));
    sorted
}

/// Countries ordered by code, ascending; stable on equal codes.
pub fn sort_by_code(countries: &[Country]) -> Vec<Country> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));
    sorted
}
