//! DEFLATE block decoding (RFC 1951 section 3.2).
//!
//! `DeflateDecoder` drives the block loop: each block opens with a 1-bit
//! final flag and a 2-bit type, then decodes as stored bytes, fixed
//! Huffman, or dynamic Huffman. Dynamic blocks first transmit their own
//! literal/length and distance tables through the code-length
//! meta-alphabet. Decoded bytes flow into the caller's writer through the
//! sliding window.

use std::io::Write;

use crate::bit_reader::BitReader;
use crate::error::{InflateError, InflateResult};
use crate::huffman::{fixed_dist_table, fixed_litlen_table, HuffmanTable};
use crate::inflate_tables::{
    CODELEN_ORDER, DIST_EXTRA_BITS, DIST_START, END_OF_BLOCK, LEN_EXTRA_BITS, LEN_START,
    NUM_DIST_CODES, NUM_LITLEN_CODES,
};
use crate::window::SlidingWindow;

/// Decoder for one complete raw DEFLATE stream.
///
/// Owns the bit cursor and the sliding window; one instance decodes one
/// input and is then discarded. Instances share nothing, so independent
/// decodes may run concurrently.
pub struct DeflateDecoder<'a> {
    reader: BitReader<'a>,
    window: SlidingWindow,
}

impl<'a> DeflateDecoder<'a> {
    /// Create a decoder over a complete in-memory stream
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(data),
            window: SlidingWindow::new(),
        }
    }

    /// Decode the whole stream into `writer`, returning the number of
    /// bytes produced. Blocks are consumed until one carries the final
    /// flag; a stream that ends before then is truncated.
    pub fn decode<W: Write>(&mut self, writer: &mut W) -> InflateResult<usize> {
        loop {
            let header_offset = self.reader.bit_position();
            let bfinal = self.reader.read_bit()?;
            let btype = self.reader.read_bits(2)? as u8;

            match btype {
                0 => self.decode_stored_block(writer)?,
                1 => self.decode_fixed_block(writer)?,
                2 => self.decode_dynamic_block(writer)?,
                _ => {
                    return Err(InflateError::InvalidBlockType {
                        btype,
                        bit_offset: header_offset,
                    })
                }
            }

            if bfinal == 1 {
                break;
            }
        }

        Ok(self.window.total_output())
    }

    /// Decode a stored block (BTYPE=00)
    fn decode_stored_block<W: Write>(&mut self, writer: &mut W) -> InflateResult<()> {
        self.reader.align_to_byte();

        let len = self.reader.read_u16_le()?;
        let nlen = self.reader.read_u16_le()?;
        if len != !nlen {
            return Err(InflateError::InvalidStoredBlock { len, nlen });
        }

        // LEN may be zero: a legal empty block contributing nothing.
        for _ in 0..len {
            let byte = self.reader.read_byte()?;
            self.window.push_literal(byte, writer)?;
        }

        Ok(())
    }

    /// Decode a block with fixed Huffman codes (BTYPE=01)
    fn decode_fixed_block<W: Write>(&mut self, writer: &mut W) -> InflateResult<()> {
        self.decode_huffman_block(writer, fixed_litlen_table(), fixed_dist_table())
    }

    /// Decode a block with dynamic Huffman codes (BTYPE=10)
    fn decode_dynamic_block<W: Write>(&mut self, writer: &mut W) -> InflateResult<()> {
        let (litlen_table, dist_table) = self.read_dynamic_tables()?;
        self.decode_huffman_block(writer, &litlen_table, &dist_table)
    }

    /// Parse the dynamic table meta-encoding: HLIT/HDIST/HCLEN counts,
    /// the code-length code in its fixed permutation order, then the
    /// run-length-encoded lengths for both alphabets.
    fn read_dynamic_tables(&mut self) -> InflateResult<(HuffmanTable, HuffmanTable)> {
        let hlit = self.reader.read_bits(5)? as usize + 257;
        let hdist = self.reader.read_bits(5)? as usize + 1;
        let hclen = self.reader.read_bits(4)? as usize + 4;

        if hlit > NUM_LITLEN_CODES {
            return Err(InflateError::header(format!(
                "too many literal/length codes ({})",
                hlit
            )));
        }
        if hdist > NUM_DIST_CODES {
            return Err(InflateError::header(format!(
                "too many distance codes ({})",
                hdist
            )));
        }

        // Code length code lengths arrive in a fixed permutation, not
        // symbol order; unsent entries stay zero.
        let mut codelen_lengths = [0u8; 19];
        for &sym in CODELEN_ORDER.iter().take(hclen) {
            codelen_lengths[sym] = self.reader.read_bits(3)? as u8;
        }
        let codelen_table = HuffmanTable::from_lengths(&codelen_lengths)?;

        // Combined literal/length + distance lengths, with repeat codes.
        let mut all_lengths = vec![0u8; hlit + hdist];
        let mut i = 0;

        while i < all_lengths.len() {
            let symbol = codelen_table.decode(&mut self.reader)?;

            match symbol {
                0..=15 => {
                    all_lengths[i] = symbol as u8;
                    i += 1;
                }
                16 => {
                    // Repeat previous length 3-6 times
                    if i == 0 {
                        return Err(InflateError::header("repeat code with no previous length"));
                    }
                    let count = self.reader.read_bits(2)? as usize + 3;
                    if i + count > all_lengths.len() {
                        return Err(InflateError::header("length repeat past end of alphabets"));
                    }
                    let prev = all_lengths[i - 1];
                    all_lengths[i..i + count].fill(prev);
                    i += count;
                }
                17 => {
                    // Repeat zero length 3-10 times
                    let count = self.reader.read_bits(3)? as usize + 3;
                    if i + count > all_lengths.len() {
                        return Err(InflateError::header("zero repeat past end of alphabets"));
                    }
                    all_lengths[i..i + count].fill(0);
                    i += count;
                }
                18 => {
                    // Repeat zero length 11-138 times
                    let count = self.reader.read_bits(7)? as usize + 11;
                    if i + count > all_lengths.len() {
                        return Err(InflateError::header("zero repeat past end of alphabets"));
                    }
                    all_lengths[i..i + count].fill(0);
                    i += count;
                }
                _ => {
                    return Err(InflateError::header(format!(
                        "invalid code length symbol {}",
                        symbol
                    )))
                }
            }
        }

        let litlen_table = HuffmanTable::from_lengths(&all_lengths[..hlit])?;
        let dist_table = HuffmanTable::from_lengths(&all_lengths[hlit..])?;
        Ok((litlen_table, dist_table))
    }

    /// Symbol loop shared by fixed and dynamic blocks
    fn decode_huffman_block<W: Write>(
        &mut self,
        writer: &mut W,
        litlen_table: &HuffmanTable,
        dist_table: &HuffmanTable,
    ) -> InflateResult<()> {
        loop {
            let symbol = litlen_table.decode(&mut self.reader)?;

            if symbol < 256 {
                self.window.push_literal(symbol as u8, writer)?;
            } else if symbol == END_OF_BLOCK {
                break;
            } else {
                // Length/distance pair. 286 and 287 participate in the
                // fixed code but never appear in valid data.
                let length_code = (symbol - 257) as usize;
                if length_code >= LEN_START.len() {
                    return Err(InflateError::InvalidLengthCode(symbol));
                }
                let length = LEN_START[length_code] as usize
                    + self.reader.read_bits(LEN_EXTRA_BITS[length_code])? as usize;

                let dist_symbol = dist_table.decode(&mut self.reader)?;
                let dist_code = dist_symbol as usize;
                if dist_code >= DIST_START.len() {
                    return Err(InflateError::InvalidLengthCode(dist_symbol));
                }
                let distance = DIST_START[dist_code] as usize
                    + self.reader.read_bits(DIST_EXTRA_BITS[dist_code])? as usize;

                self.window.copy_match(distance, length, writer)?;
            }
        }

        Ok(())
    }
}
