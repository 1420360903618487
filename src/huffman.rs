//! Canonical Huffman tables (RFC 1951 section 3.2.2).
//!
//! Tables are built from a code-length array: symbols take codes in order
//! of increasing length, ties broken by symbol index. Decoding uses a
//! direct lookup table indexed by peeked bits for short codes, and falls
//! back to bit-by-bit canonical decoding for long codes or when the
//! stream is nearly exhausted.
//!
//! Note the bit-order asymmetry: `BitReader::read_bits` composes LSB
//! first, but a Huffman code's bits arrive MSB-of-the-code first. The
//! lookup table absorbs this by storing each code bit-reversed; the slow
//! path accumulates bits MSB-first directly.

use std::sync::OnceLock;

use crate::bit_reader::BitReader;
use crate::error::{InflateError, InflateResult};
use crate::inflate_tables::MAX_CODE_LEN;

/// Primary lookup width. Codes longer than this take the slow path.
const LOOKUP_BITS: u8 = 9;

/// Huffman decoder with fast lookup table
pub struct HuffmanTable {
    /// Lookup table: indexed by the next `lookup_bits` bits of the stream
    /// (LSB-first), contains (symbol, code_length). Length 0 marks entries
    /// with no short code.
    lookup: Vec<(u16, u8)>,
    /// Lookup table width (min of max code length and LOOKUP_BITS)
    lookup_bits: u8,
    /// Maximum code length, 0 for an empty table
    max_len: u8,
    /// Number of codes of each length
    counts: [u16; MAX_CODE_LEN + 1],
    /// Symbols ordered by (code length, symbol index)
    symbols: Vec<u16>,
}

impl HuffmanTable {
    /// Build a table from code lengths, one entry per symbol.
    ///
    /// A length of 0 excludes the symbol. Over-subscribed length sets are
    /// rejected; incomplete sets are accepted and fail only when a gap
    /// code is actually read. An all-zero array builds an empty table
    /// that fails on any decode, which is how unused distance alphabets
    /// in literal-only dynamic blocks behave.
    pub fn from_lengths(lengths: &[u8]) -> InflateResult<Self> {
        let max_len = *lengths.iter().max().unwrap_or(&0);
        if max_len as usize > MAX_CODE_LEN {
            return Err(InflateError::header(format!(
                "code length {} exceeds maximum {}",
                max_len, MAX_CODE_LEN
            )));
        }

        // Count codes of each length
        let mut counts = [0u16; MAX_CODE_LEN + 1];
        for &len in lengths {
            if len > 0 {
                counts[len as usize] += 1;
            }
        }

        // Kraft check: more codes of some length than the prefix tree has
        // room for means the lengths cannot form a prefix-free code.
        let mut left: i32 = 1;
        for len in 1..=MAX_CODE_LEN {
            left <<= 1;
            left -= counts[len] as i32;
            if left < 0 {
                return Err(InflateError::header("over-subscribed code lengths"));
            }
        }

        if max_len == 0 {
            return Ok(Self {
                lookup: Vec::new(),
                lookup_bits: 0,
                max_len: 0,
                counts,
                symbols: Vec::new(),
            });
        }

        // First numeric code of each length (canonical Huffman)
        let mut next_code = [0u32; MAX_CODE_LEN + 1];
        let mut code = 0u32;
        for bits in 1..=MAX_CODE_LEN {
            code = (code + counts[bits - 1] as u32) << 1;
            next_code[bits] = code;
        }

        // Symbols sorted by (length, index), driven by per-length offsets
        let mut offsets = [0usize; MAX_CODE_LEN + 2];
        for len in 1..=MAX_CODE_LEN {
            offsets[len + 1] = offsets[len] + counts[len] as usize;
        }
        let mut symbols = vec![0u16; offsets[MAX_CODE_LEN + 1]];

        let lookup_bits = max_len.min(LOOKUP_BITS);
        let mut lookup = vec![(0u16, 0u8); 1 << lookup_bits];

        for (symbol, &len) in lengths.iter().enumerate() {
            if len == 0 {
                continue;
            }

            symbols[offsets[len as usize]] = symbol as u16;
            offsets[len as usize] += 1;

            let code = next_code[len as usize];
            next_code[len as usize] += 1;

            if len <= lookup_bits {
                // Replicate across every lookup index sharing this prefix.
                let reversed = reverse_bits(code, len);
                let fill_count = 1u32 << (lookup_bits - len);
                for i in 0..fill_count {
                    let idx = (reversed | (i << len)) as usize;
                    lookup[idx] = (symbol as u16, len);
                }
            }
        }

        Ok(Self {
            lookup,
            lookup_bits,
            max_len,
            counts,
            symbols,
        })
    }

    /// Decode the next symbol from the bit stream.
    #[inline]
    pub fn decode(&self, reader: &mut BitReader) -> InflateResult<u16> {
        if self.max_len == 0 {
            return Err(InflateError::InvalidHuffmanCode {
                bit_offset: reader.bit_position(),
            });
        }

        // Fast path: direct lookup on peeked bits. Valid whenever the
        // entry's code fits in the bits actually available.
        let (peek, available) = reader.peek_bits(self.lookup_bits);
        let (symbol, len) = self.lookup[peek as usize];
        if len > 0 && len <= available {
            reader.read_bits(len)?;
            return Ok(symbol);
        }

        self.decode_slow(reader)
    }

    /// Bit-by-bit canonical decode, MSB-of-code first.
    ///
    /// Walks the lengths in increasing order keeping the first code and
    /// first symbol index of each length; a candidate inside the range of
    /// codes of its length identifies the symbol.
    fn decode_slow(&self, reader: &mut BitReader) -> InflateResult<u16> {
        let start = reader.bit_position();
        let mut code = 0u32;
        let mut first = 0u32;
        let mut index = 0usize;

        for len in 1..=self.max_len as usize {
            code |= reader.read_bit()? as u32;
            let count = self.counts[len] as u32;
            if code < first + count {
                return Ok(self.symbols[index + (code - first) as usize]);
            }
            index += count as usize;
            first = (first + count) << 1;
            code <<= 1;
        }

        Err(InflateError::InvalidHuffmanCode { bit_offset: start })
    }
}

/// Reverse the low `bits` bits of a code
#[inline]
fn reverse_bits(value: u32, bits: u8) -> u32 {
    let mut result = 0u32;
    let mut v = value;
    for _ in 0..bits {
        result = (result << 1) | (v & 1);
        v >>= 1;
    }
    result
}

static FIXED_LITLEN: OnceLock<HuffmanTable> = OnceLock::new();
static FIXED_DIST: OnceLock<HuffmanTable> = OnceLock::new();

/// Fixed literal/length table (BTYPE=01), built once per process.
pub fn fixed_litlen_table() -> &'static HuffmanTable {
    FIXED_LITLEN.get_or_init(|| {
        let mut lengths = [0u8; 288];
        lengths[0..144].fill(8);
        lengths[144..256].fill(9);
        lengths[256..280].fill(7);
        lengths[280..288].fill(8);
        HuffmanTable::from_lengths(&lengths).expect("fixed literal/length lengths are valid")
    })
}

/// Fixed distance table (BTYPE=01): all 32 codes are 5 bits.
pub fn fixed_dist_table() -> &'static HuffmanTable {
    FIXED_DIST.get_or_init(|| {
        let lengths = [5u8; 32];
        HuffmanTable::from_lengths(&lengths).expect("fixed distance lengths are valid")
    })
}
