//! Comparison tests: byte-exact verification against real encoders.
//!
//! Every stream here is produced by a third-party deflater and decoded
//! by this crate: flate2 (zlib heuristics, levels 0-9) and libdeflate
//! (independent block-splitting and table choices, up to level 12). The
//! decoder has no say in how the bitstreams were shaped, which is the
//! point.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::InflateError;

/// Raw deflate via flate2 at the given level (0 = stored blocks only)
fn deflate_raw(data: &[u8], level: u32) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Raw deflate via libdeflate, a fully independent encoder
fn deflate_optimized(data: &[u8], level: i32) -> Vec<u8> {
    let lvl = libdeflater::CompressionLvl::new(level).unwrap();
    let mut compressor = libdeflater::Compressor::new(lvl);
    let mut out = vec![0u8; compressor.deflate_compress_bound(data.len())];
    let n = compressor.deflate_compress(data, &mut out).unwrap();
    out.truncate(n);
    out
}

fn random_corpus(alphabet: &[u8], len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn roundtrip_levels_0_through_9() {
    let original = random_corpus(b"aab", 64 * 1024, 0x01);

    for level in 0..=9 {
        let compressed = deflate_raw(&original, level);
        let decoded = crate::decompress(&compressed).unwrap();
        crate::assert_slices_eq!(decoded, original, "level mismatch");
    }
}

#[test]
fn roundtrip_incompressible_data() {
    let mut rng = StdRng::seed_from_u64(0x02);
    let original: Vec<u8> = (0..32 * 1024).map(|_| rng.gen()).collect();

    let compressed = deflate_raw(&original, 6);
    let decoded = crate::decompress(&compressed).unwrap();
    crate::assert_slices_eq!(decoded, original);
}

#[test]
fn roundtrip_empty_input() {
    for level in [0, 6] {
        let compressed = deflate_raw(b"", level);
        assert_eq!(crate::decompress(&compressed).unwrap(), b"");
    }
}

#[test]
fn scenario_64k_single_byte_level_9() {
    let original = vec![b'a'; 64 * 1024];
    let compressed = deflate_raw(&original, 9);
    let decoded = crate::decompress(&compressed).unwrap();
    crate::assert_slices_eq!(decoded, original);
}

#[test]
fn scenario_256k_alphanum_stored_blocks() {
    // Level 0 emits a run of stored blocks, each at most 65535 bytes.
    let original = random_corpus(b"ab123", 256 * 1024, 0x03);
    let compressed = deflate_raw(&original, 0);
    assert!(compressed.len() > original.len());

    let decoded = crate::decompress(&compressed).unwrap();
    crate::assert_slices_eq!(decoded, original);
}

#[test]
fn cross_encoder_libdeflate() {
    let corpora = [
        random_corpus(b"a", 64 * 1024, 0x04),
        random_corpus(b"aab", 128 * 1024, 0x05),
        random_corpus(b"aab12333", 256 * 1024, 0x06),
    ];

    for original in &corpora {
        for level in [1, 6, 12] {
            let compressed = deflate_optimized(original, level);
            let decoded = crate::decompress(&compressed).unwrap();
            crate::assert_slices_eq!(decoded, original, "libdeflate level mismatch");
        }
    }
}

#[test]
fn matches_reference_decoder() {
    let original = random_corpus(b"the quick brown fox ", 100 * 1024, 0x07);
    let compressed = deflate_raw(&original, 9);

    let mut reference = vec![0u8; original.len()];
    let n = libdeflater::Decompressor::new()
        .deflate_decompress(&compressed, &mut reference)
        .unwrap();

    let decoded = crate::decompress(&compressed).unwrap();
    assert_eq!(decoded.len(), n);
    crate::assert_slices_eq!(decoded, reference[..n]);
}

#[test]
fn decompress_into_reports_byte_count() {
    let original = random_corpus(b"abc", 10 * 1024, 0x08);
    let compressed = deflate_raw(&original, 6);

    let mut out = Vec::new();
    let n = crate::decompress_into(&compressed, &mut out).unwrap();
    assert_eq!(n, original.len());
    crate::assert_slices_eq!(out, original);
}

#[test]
fn any_trailing_truncation_is_detected() {
    let original = random_corpus(b"aab12333", 2 * 1024, 0x09);
    let compressed = deflate_raw(&original, 6);

    // A truncated prefix decodes identically to the full stream until
    // the missing bits are needed, so the failure must always be
    // TruncatedInput, never silent success or a wrong-output decode.
    for cut in 1..compressed.len() {
        let result = crate::decompress(&compressed[..compressed.len() - cut]);
        assert!(
            matches!(result, Err(InflateError::TruncatedInput { .. })),
            "cut {} gave {:?}",
            cut,
            result
        );
    }
}

#[test]
fn truncation_detected_across_levels() {
    let original = random_corpus(b"ab", 32 * 1024, 0x0A);

    for level in [0, 1, 9] {
        let compressed = deflate_raw(&original, level);
        for cut in [1, 2, 100, compressed.len() / 2] {
            let result = crate::decompress(&compressed[..compressed.len() - cut]);
            assert!(
                matches!(result, Err(InflateError::TruncatedInput { .. })),
                "level {} cut {} gave {:?}",
                level,
                cut,
                result
            );
        }
    }
}
