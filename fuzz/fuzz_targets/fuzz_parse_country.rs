#![no_main]

use libfuzzer_sys::fuzz_target;
use vatrates::core::{DecimalCodec, parse_country};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = parse_country(s, '\t', &DecimalCodec::default());
    }
});
