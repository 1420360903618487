//! Raw DEFLATE (RFC 1951) decompression.
//!
//! Decodes raw deflate bitstreams: no zlib or gzip envelope, no
//! checksums, no size fields. Any stream a conforming encoder produces
//! decodes byte-exactly, whether it came from a standard deflater at
//! levels 0-9 or from a more aggressive optimizer with its own
//! block-splitting heuristics.
//!
//! # Architecture
//!
//! - `BitReader`: LSB-first bit-level stream reading
//! - `HuffmanTable`: canonical Huffman tables with fast lookup
//! - `SlidingWindow`: 32KB circular history for back-references
//! - [`DeflateDecoder`]: block loop over stored/fixed/dynamic blocks
//!
//! Decoding is a pure synchronous function of the input bytes. The only
//! process-wide state is the pair of immutable fixed Huffman tables,
//! built once and shared read-only, so independent decodes can run in
//! parallel without coordination.
//!
//! ```
//! let compressed = [0x4B, 0x04, 0x00]; // fixed-Huffman block for "a"
//! assert_eq!(unflate::decompress(&compressed).unwrap(), b"a");
//! ```

use std::io::Write;

mod bit_reader;
mod decoder;
mod error;
mod huffman;
mod inflate_tables;
mod window;

#[cfg(test)]
mod comparison_tests;
#[cfg(test)]
mod test_utils;

pub use decoder::DeflateDecoder;
pub use error::{InflateError, InflateResult};

/// Decompress a complete raw DEFLATE stream into a new buffer.
///
/// The output length is whatever the stream encodes; it is not declared
/// anywhere in a raw stream.
pub fn decompress(input: &[u8]) -> InflateResult<Vec<u8>> {
    let mut output = Vec::with_capacity(input.len().saturating_mul(4));
    DeflateDecoder::new(input).decode(&mut output)?;
    Ok(output)
}

/// Decompress a complete raw DEFLATE stream into `writer`, returning the
/// number of bytes produced.
pub fn decompress_into<W: Write>(input: &[u8], writer: &mut W) -> InflateResult<usize> {
    DeflateDecoder::new(input).decode(writer)
}
