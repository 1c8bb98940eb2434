#![no_main]

use libfuzzer_sys::fuzz_target;
use lzbits::codes::{decode_length, offset_width};
use lzbits::{EncodeConfig, Encoder, Lz77Encoder};

fuzz_target!(|data: &[u8]| {
    // First byte picks the window size, the rest is the source
    let Some((&window, source)) = data.split_first() else {
        return;
    };
    let window_size = usize::from(window) + 1;

    let mut encoder = Lz77Encoder::new(EncodeConfig::with_window_size(window_size));
    let stream = encoder.encode(source).expect("encoding never fails for bytes");

    let mut covered = Vec::with_capacity(source.len());
    let mut total = 0u64;
    for step in stream.steps() {
        covered.extend_from_slice(step.text());
        total += step.bit_count() as u64;
        if let (Some(marker), true) = (step.marker(), step.flag()) {
            assert_eq!(decode_length(step.length_code()), Some(step.match_length()));
            assert!(step.offset_code().len() >= offset_width(marker) as usize);
        }
    }
    assert_eq!(covered, source);
    assert_eq!(total, stream.total_bits());
});
