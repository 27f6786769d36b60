#![no_main]

use filechecker::infrastructure::catalog::{ByteParsePolicy, parse_catalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for policy in [ByteParsePolicy::Strict, ByteParsePolicy::Lenient] {
        if let Ok(catalog) = parse_catalog(text, policy) {
            let _ = catalog.classify(data);
        }
    }
});
