#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtjson::{from_bytes, to_bytes, Document, Value, Variant};

fuzz_target!(|v: Value| {
    let doc = Document::new("", v);

    for variant in Variant::ALL {
        // Trees with over-long strings or deep nesting are rejected, not
        // encoded. Whatever is encoded must decode with default options.
        let bs = match to_bytes(&doc, variant) {
            Ok(bs) => bs,
            Err(_) => continue,
        };

        // Compare bytes rather than trees so NaN payloads count as equal.
        let back = from_bytes(&bs, variant).unwrap();
        assert_eq!(to_bytes(&back, variant).unwrap(), bs);
    }
});
