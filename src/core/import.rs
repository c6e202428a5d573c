//! Dataset import: read a rate table line by line into countries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::codec::DecimalCodec;
use super::error::{MalformedRecord, VatRatesError};
use super::parser::parse_country;
use super::types::Country;

/// Read every line of `reader` through `parse`, preserving line order.
///
/// The first line that fails to parse aborts the import; the error carries
/// its 1-based line number and no partial dataset is returned. `source` only
/// names the input in I/O errors.
pub fn import_with<R, F>(reader: R, source: &Path, mut parse: F) -> Result<Vec<Country>, VatRatesError>
where
    R: BufRead,
    F: FnMut(&str) -> Result<Country, MalformedRecord>,
{
    let mut countries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx as u64 + 1;
        let line = line.map_err(|source_err| VatRatesError::SourceUnavailable {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let country = parse(&line).map_err(|e| e.at_line(line_number))?;
        countries.push(country);
    }
    Ok(countries)
}

/// Import a rate table from any buffered reader.
pub fn import_from_reader<R: BufRead>(
    reader: R,
    source: &Path,
    delimiter: char,
    codec: &DecimalCodec,
) -> Result<Vec<Country>, VatRatesError> {
    import_with(reader, source, |line| parse_country(line, delimiter, codec))
}

/// Import a rate table from a file.
///
/// The file is closed before this returns, whether the import succeeded or not.
pub fn import_from_file(
    path: impl AsRef<Path>,
    delimiter: char,
    codec: &DecimalCodec,
) -> Result<Vec<Country>, VatRatesError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VatRatesError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    import_from_reader(BufReader::new(file), path, delimiter, codec)
}
