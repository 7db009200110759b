//! Property-based tests for Huffman framing.
//!
//! These tests verify that coding properties hold across a wide range of inputs:
//! - Every buffer round-trips, including empty and single-symbol buffers
//! - Codes are prefix-free and the padding count stays within 0-7
//! - Frames never shrink below their header plus tree
//!
//! Run with: cargo test -p huffpress --test proptest_roundtrip

use proptest::prelude::*;

use huffpress::{
    build, compress, decompress, restore, serialize, Error, Frame, FrequencyTable,
    HuffmanCodec, HuffmanConfig,
};
use huffpress_core::{Codec, Compressor, Decompressor};

/// Strategy for arbitrary byte buffers.
fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2048)
}

/// Strategy for text-like buffers drawn from a small alphabet.
fn skewed_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            8 => Just(b'e'),
            4 => Just(b't'),
            2 => Just(b' '),
            1 => any::<u8>(),
        ],
        0..4096,
    )
}

/// Strategy for buffers with at least two distinct bytes.
fn multi_symbol_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 2..1024)
        .prop_filter("needs two distinct bytes", |data| {
            data.iter().any(|&b| b != data[0])
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    })]

    /// Property: decompress(compress(x)) == x.
    #[test]
    fn prop_roundtrip(data in bytes_strategy()) {
        let frame = compress(&data).unwrap();
        prop_assert_eq!(decompress(&frame).unwrap(), data);
    }

    /// Property: round-trip holds for skewed, highly compressible input.
    #[test]
    fn prop_roundtrip_skewed(data in skewed_strategy()) {
        let frame = compress(&data).unwrap();
        prop_assert_eq!(decompress(&frame).unwrap(), data);
    }

    /// Property: a run of one byte round-trips under the default policy.
    #[test]
    fn prop_single_symbol_roundtrip(byte in any::<u8>(), len in 1usize..512) {
        let data = vec![byte; len];
        prop_assert_eq!(decompress(&compress(&data).unwrap()).unwrap(), data);
    }

    /// Property: the filler bit never changes the decoded output.
    #[test]
    fn prop_filler_independent(data in bytes_strategy(), filler in any::<bool>()) {
        let config = HuffmanConfig::default().with_filler_bit(filler);
        let codec = HuffmanCodec::with_config(config);
        let frame = codec.compress(&data).unwrap();
        prop_assert_eq!(codec.decompress(&frame).unwrap(), data);
    }

    /// Property: 0 <= padding <= 7 and the frame holds header plus tree.
    #[test]
    fn prop_frame_bounds(data in bytes_strategy()) {
        let frame = compress(&data).unwrap();
        let parsed = Frame::parse(&frame).unwrap();
        let tree_length = u16::from_be_bytes([frame[0], frame[1]]) as usize;

        prop_assert!(parsed.padding_count <= 7);
        prop_assert!(frame.len() >= 3 + tree_length);
        prop_assert_eq!(parsed.tree_bytes.len(), tree_length);
        prop_assert_eq!(parsed.encoded_len(), frame.len());
    }

    /// Property: generated code tables are prefix-free and cover every byte.
    #[test]
    fn prop_prefix_free(data in multi_symbol_strategy()) {
        let freq = FrequencyTable::count(&data);
        let (tree, codes) = build(&freq).unwrap();

        prop_assert!(codes.is_prefix_free());
        prop_assert_eq!(codes.len(), freq.distinct());
        prop_assert_eq!(tree.symbols(), freq.distinct());
        prop_assert_eq!(tree.code_table(), codes);
    }

    /// Property: the packed length in bits matches the code table cost.
    #[test]
    fn prop_packed_length(data in multi_symbol_strategy()) {
        let freq = FrequencyTable::count(&data);
        let (tree, codes) = build(&freq).unwrap();
        let frame = compress(&data).unwrap();
        let parsed = Frame::parse(&frame).unwrap();

        let bits = parsed.packed_bits.len() as u64 * 8 - parsed.padding_count as u64;
        prop_assert_eq!(bits, codes.encoded_bits(&freq));
        let blob = serialize(&tree).unwrap();
        prop_assert_eq!(parsed.tree_bytes, blob.as_slice());
    }

    /// Property: restore(serialize(tree)) == tree.
    #[test]
    fn prop_tree_codec_identity(data in bytes_strategy()) {
        prop_assume!(!data.is_empty());
        let (tree, _) = build(&FrequencyTable::count(&data)).unwrap();
        let blob = serialize(&tree).unwrap();
        prop_assert_eq!(restore(&blob).unwrap(), tree);
    }

    /// Property: re-compressing decoded output reproduces the same frame.
    #[test]
    fn prop_codec_idempotent(data in bytes_strategy()) {
        let codec = <HuffmanCodec as Codec>::new();
        let frame = codec.compress(&data).unwrap();
        let again = codec.compress(&codec.decompress(&frame).unwrap()).unwrap();
        prop_assert_eq!(frame, again);
    }

    /// Property: cutting a frame inside its header or tree is a truncation.
    #[test]
    fn prop_truncated_frame(data in multi_symbol_strategy(), cut in any::<prop::sample::Index>()) {
        let frame = compress(&data).unwrap();
        let tree_length = u16::from_be_bytes([frame[0], frame[1]]) as usize;
        let len = cut.index(3 + tree_length);

        let result = decompress(&frame[..len]);
        prop_assert!(
            matches!(result, Err(Error::TruncatedFrame { .. })),
            "cut at {} of {} gave {:?}",
            len,
            frame.len(),
            result
        );
    }

    /// Property: arbitrary bytes never panic the decoder.
    #[test]
    fn prop_garbage_never_panics(data in bytes_strategy()) {
        if let Err(e) = decompress(&data) {
            prop_assert!(e.is_decode_error(), "unexpected error {:?}", e);
        }
    }
}

#[test]
fn scenario_abcabcabc() {
    let frame = compress(b"abcabcabc").unwrap();
    let parsed = Frame::parse(&frame).unwrap();

    assert_eq!(parsed.packed_bits.len(), 2);
    assert_eq!(parsed.padding_count, 1);
    assert_eq!(decompress(&frame).unwrap(), b"abcabcabc");
}

#[test]
fn scenario_empty() {
    assert_eq!(compress(b"").unwrap(), vec![0, 0, 0]);
    assert!(decompress(&[0, 0, 0]).unwrap().is_empty());

    let strict = HuffmanCodec::with_config(HuffmanConfig::strict());
    assert!(matches!(
        strict.compress(b""),
        Err(Error::UnsupportedInputShape(_))
    ));
}

#[test]
fn scenario_declared_tree_too_long() {
    let mut frame = compress(b"hello world").unwrap();
    frame[0] = 0xFF;
    assert!(matches!(
        decompress(&frame),
        Err(Error::TruncatedFrame { .. })
    ));
}

#[test]
fn scenario_bits_end_inside_branch() {
    let mut frame = compress(b"abcabcabc").unwrap();
    // Claim 3 filler bits instead of 1: the stream then ends on the "1" of "10".
    let pad = frame.len() - 3;
    frame[pad] = 3;
    assert!(matches!(
        decompress(&frame),
        Err(Error::MalformedBitstream { .. })
    ));
}
