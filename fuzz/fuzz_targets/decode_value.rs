#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtjson::{from_bytes_with_opts, to_bytes, DeOpts, Variant};

fuzz_target!(|data: &[u8]| {
    let (first, data) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let variant = Variant::ALL[*first as usize % Variant::ALL.len()];

    let opts = DeOpts::new().max_seq_len(100);
    if let Ok((doc, used)) = from_bytes_with_opts(data, variant, opts) {
        // Duplicate compound names collapse, nothing else changes size.
        let bs = to_bytes(&doc, variant).unwrap();
        assert!(bs.len() <= used);
    }
});
