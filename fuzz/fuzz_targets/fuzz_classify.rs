#![no_main]

use filechecker::{ClassificationResult, bundled_catalog, classify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(catalog) = bundled_catalog() else {
        return;
    };
    let result = classify(data, catalog);
    if data.is_empty() {
        assert_eq!(result, ClassificationResult::BufferTooShort);
    }
});
