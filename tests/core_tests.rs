use std::io::Write;
use std::path::{Path, PathBuf};

use rust_decimal_macros::dec;
use vatrates::core::*;

fn sample_table() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("res").join("vat-eu.csv")
}

fn scenario() -> Vec<Country> {
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

fn write_table(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// --- Import ---

#[test]
fn sample_table_imports_in_file_order() {
    let store = CountryStore::from_file(sample_table(), '\t', &DecimalCodec::default()).unwrap();
    assert_eq!(store.len(), 27);
    let first = &store.countries()[0];
    assert_eq!(first.code, "AT");
    let france = store.countries().iter().find(|c| c.code == "FR").unwrap();
    assert_eq!(france.vat_reduced, dec!(5.5));
}

#[test]
fn temp_file_round_trip_through_import() {
    let file = write_table("HU\tHungary\t27\t18\tfalse\nLU\tLuxembourg\t17\t8\ttrue\n");
    let list = import_from_file(file.path(), '\t', &DecimalCodec::default()).unwrap();
    assert_eq!(
        list,
        vec![
            Country::new("HU", "Hungary", dec!(27), dec!(18), false),
            Country::new("LU", "Luxembourg", dec!(17), dec!(8), true),
        ]
    );
}

#[test]
fn malformed_line_aborts_whole_import() {
    let file = write_table(
        "AT\tAustria\t20\t10\tfalse\nFR\tFrance\t20\t5,5\tfalse\nHU\tHungary\t27\t18\n",
    );
    let err = import_from_file(file.path(), '\t', &DecimalCodec::default()).unwrap_err();
    match err {
        VatRatesError::MalformedRecord(m) => {
            assert_eq!(m.line, Some(3));
            assert!(m.to_string().ends_with(", line 3"));
        }
        other => panic!("expected MalformedRecord, got {other}"),
    }
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = import_from_file(dir.path().join("nope.csv"), '\t', &DecimalCodec::default())
        .unwrap_err();
    assert!(matches!(err, VatRatesError::SourceUnavailable { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn empty_file_yields_empty_store() {
    let file = write_table("");
    let store = CountryStore::from_file(file.path(), '\t', &DecimalCodec::default()).unwrap();
    assert!(store.is_empty());
    assert!(matches!(store.require_non_empty(), Err(VatRatesError::EmptyDataset)));
}

// --- Classification ---

#[test]
fn scenario_threshold_20() {
    let split = partition(&scenario(), dec!(20));
    assert_eq!(codes(&sort_by_vat_standard_desc(&split.above)), ["HU", "DK"]);
    assert_eq!(codes(&sort_by_code(&split.other)), ["AT", "FR"]);
}

#[test]
fn scenario_threshold_27() {
    let split = partition(&scenario(), dec!(27));
    assert!(split.above.is_empty());
    assert_eq!(codes(&sort_by_code(&split.other)), ["AT", "DK", "FR", "HU"]);
}

#[test]
fn special_regime_line_lands_in_other() {
    let lu = parse_country("LU\tLuxembourg\t17\t8\ttrue", '\t', &DecimalCodec::default()).unwrap();
    assert!(lu.has_special_regime);
    for threshold in [dec!(0), dec!(5), dec!(16.99)] {
        let split = partition(std::slice::from_ref(&lu), threshold);
        assert!(split.above.is_empty());
        assert_eq!(split.other, vec![lu.clone()]);
    }
}

#[test]
fn sample_table_partition_at_default_threshold() {
    let store = CountryStore::from_file(sample_table(), '\t', &DecimalCodec::default()).unwrap();
    let split = partition(store.countries(), DEFAULT_THRESHOLD);
    assert!(split.above.iter().all(|c| c.vat_standard > dec!(20)));
    assert!(split.above.iter().all(|c| !c.has_special_regime));
    assert!(split.other.iter().any(|c| c.code == "EL"));
    assert_eq!(split.above.len() + split.other.len(), store.len());
}

#[test]
fn two_pass_and_one_pass_agree_on_sample_table() {
    let store = CountryStore::from_file(sample_table(), '\t', &DecimalCodec::default()).unwrap();
    for threshold in [dec!(0), dec!(19), dec!(20), dec!(21.5), dec!(24), dec!(30)] {
        let above = sort_by_vat_standard_desc(&filter_above(store.countries(), threshold));
        let other = sort_by_code(&subtract(store.countries(), &above));
        let split = partition(store.countries(), threshold);
        assert_eq!(above, sort_by_vat_standard_desc(&split.above));
        assert_eq!(other, sort_by_code(&split.other));
    }
}

// --- Configuration ---

#[test]
fn config_codec_drives_parsing() {
    let config = VatRatesConfigBuilder::new()
        .delimiter(';')
        .decimal_separator('.')
        .build()
        .unwrap();
    let c = parse_country("FR;France;20;5.5;false", config.delimiter, &config.codec()).unwrap();
    assert_eq!(c.vat_reduced, dec!(5.5));
}

#[test]
fn config_rejects_comma_delimiter_with_comma_decimals() {
    let err = VatRatesConfigBuilder::new().delimiter(',').build().unwrap_err();
    assert!(matches!(err, VatRatesError::InvalidConfig(_)));
    assert_eq!(
        err.to_string(),
        "invalid configuration: delimiter and decimal separator are both ','"
    );
}

#[test]
fn config_serializes() {
    let config = VatRatesConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: VatRatesConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
