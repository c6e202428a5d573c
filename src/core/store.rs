use std::path::Path;

use super::codec::DecimalCodec;
use super::error::VatRatesError;
use super::import::import_from_file;
use super::types::Country;

/// The imported dataset of one run, in file order.
///
/// Read-only after construction: every pipeline stage borrows the countries
/// and returns new sequences, so callers never need a defensive copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryStore {
    countries: Vec<Country>,
}

impl CountryStore {
    /// Wrap an already imported dataset.
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Import a rate table file into a new store.
    pub fn from_file(
        path: impl AsRef<Path>,
        delimiter: char,
        codec: &DecimalCodec,
    ) -> Result<Self, VatRatesError> {
        import_from_file(path, delimiter, codec).map(Self::new)
    }

    /// All countries, in file order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// The countries, or [`VatRatesError::EmptyDataset`] when there are none.
    pub fn require_non_empty(&self) -> Result<&[Country], VatRatesError> {
        if self.countries.is_empty() {
            return Err(VatRatesError::EmptyDataset);
        }
        Ok(&self.countries)
    }
}

impl From<Vec<Country>> for CountryStore {
    fn from(countries: Vec<Country>) -> Self {
        Self::new(countries)
    }
}
