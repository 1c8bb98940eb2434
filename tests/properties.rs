//! Property tests over arbitrary inputs and window sizes.

use proptest::prelude::*;

use lzbits::codes::{decode_length, encode_length, offset_width, LITERAL_BITS};
use lzbits::{EncodeConfig, Encoder, Lz77Encoder};

/// Small alphabets give plenty of matches
fn source_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(b"AB".to_vec()), 0..200),
        prop::collection::vec(prop::sample::select(b"ACGT_".to_vec()), 0..200),
        prop::collection::vec(any::<u8>(), 0..200),
    ]
}

proptest! {
    #[test]
    fn total_bits_is_sum_of_steps(source in source_strategy(), window in 1usize..64) {
        let mut encoder = Lz77Encoder::new(EncodeConfig::with_window_size(window));
        let stream = encoder.encode(&source).unwrap();
        let sum: u64 = stream.steps().iter().map(|s| s.bit_count() as u64).sum();
        prop_assert_eq!(stream.total_bits(), sum);
        prop_assert_eq!(stream.bit_string().len() as u64, sum);
    }

    #[test]
    fn steps_cover_source_in_order(source in source_strategy(), window in 1usize..64) {
        let mut encoder = Lz77Encoder::new(EncodeConfig::with_window_size(window));
        let stream = encoder.encode(&source).unwrap();

        prop_assert!(stream.len() <= source.len());
        let mut rebuilt = Vec::with_capacity(source.len());
        for (i, step) in stream.steps().iter().enumerate() {
            prop_assert_eq!(step.index(), i);
            prop_assert!(step.token().uncompressed_size() >= 1);
            rebuilt.extend_from_slice(step.text());
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn literal_codes_are_eight_bits(source in source_strategy(), window in 1usize..64) {
        let mut encoder = Lz77Encoder::new(EncodeConfig::with_window_size(window));
        let stream = encoder.encode(&source).unwrap();
        for step in stream.steps().iter().filter(|s| !s.flag()) {
            prop_assert_eq!(step.length_code().len(), LITERAL_BITS as usize);
            prop_assert!(step.offset_code().is_empty());
            prop_assert_eq!(step.length_code().value(), u128::from(step.text()[0]));
        }
    }

    #[test]
    fn match_codes_are_well_formed(source in source_strategy(), window in 1usize..64) {
        let mut encoder = Lz77Encoder::new(EncodeConfig::with_window_size(window));
        let stream = encoder.encode(&source).unwrap();
        for step in stream.steps().iter().filter(|s| s.flag()) {
            prop_assert_eq!(decode_length(step.length_code()), Some(step.match_length()));
            prop_assert!(step.match_length() <= window);

            let marker = step.marker().unwrap();
            let offset = step.offset().unwrap();
            prop_assert!(step.offset_code().len() >= offset_width(marker) as usize);
            prop_assert_eq!(step.offset_code().value(), offset as u128);
        }
    }

    #[test]
    fn window_never_exceeds_size(source in source_strategy(), window in 1usize..32) {
        let mut encoder = Lz77Encoder::new(EncodeConfig::with_window_size(window));
        let stream = encoder.encode(&source).unwrap();

        let mut consumed = 0;
        for step in stream.steps() {
            consumed += step.text().len();
            prop_assert!(step.window_len() <= window);
            prop_assert_eq!(step.window_len(), consumed.min(window));
        }
    }

    #[test]
    fn length_code_self_delimits(length in 1usize..=usize::MAX) {
        let code = encode_length(length).unwrap();
        let k = code.leading_ones();
        prop_assert_eq!(code.len(), 2 * k + 1);
        prop_assert_eq!(code.bit(k), Some(false));
        prop_assert_eq!(decode_length(&code), Some(length));
    }
}
