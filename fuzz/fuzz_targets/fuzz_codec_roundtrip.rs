#![no_main]

use libfuzzer_sys::fuzz_target;
use vatrates::core::DecimalCodec;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let codec = DecimalCodec::default();
        if let Ok(value) = codec.parse_decimal(s) {
            let rendered = codec.format_decimal(value);
            assert_eq!(codec.parse_decimal(&rendered), Ok(value));
        }
    }
});
