//! Bit-level reading over an in-memory DEFLATE stream.
//!
//! DEFLATE packs data bits starting at the least-significant bit of each
//! byte. Multi-bit values are composed with the first bit read as the LSB
//! of the result; Huffman code bits are the one exception and are handled
//! by the decoder, which accumulates them MSB-first.

use crate::error::{InflateError, InflateResult};

/// Bit reader for deflate streams
pub struct BitReader<'a> {
    data: &'a [u8],
    byte_pos: usize,
    bit_pos: u8, // 0-7, bit position within current byte
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Current bit position in the stream, for error reporting.
    #[inline]
    pub fn bit_position(&self) -> u64 {
        self.byte_pos as u64 * 8 + self.bit_pos as u64
    }

    #[inline]
    fn truncated(&self) -> InflateError {
        InflateError::TruncatedInput {
            bit_offset: self.bit_position(),
        }
    }

    /// Read a single bit (LSB first per deflate spec)
    #[inline]
    pub fn read_bit(&mut self) -> InflateResult<u8> {
        if self.byte_pos >= self.data.len() {
            return Err(self.truncated());
        }

        let bit = (self.data[self.byte_pos] >> self.bit_pos) & 1;
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.byte_pos += 1;
        }

        Ok(bit)
    }

    /// Read `count` bits (up to 16), first bit read becoming the LSB of the
    /// result.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> InflateResult<u32> {
        debug_assert!(count <= 16);

        // Fast path: all requested bits sit in the current byte.
        if self.byte_pos < self.data.len() {
            let remaining_in_byte = 8 - self.bit_pos;
            if count <= remaining_in_byte {
                let mask = (1u32 << count) - 1;
                let value = ((self.data[self.byte_pos] >> self.bit_pos) as u32) & mask;
                self.bit_pos += count;
                if self.bit_pos >= 8 {
                    self.bit_pos -= 8;
                    self.byte_pos += 1;
                }
                return Ok(value);
            }
        }

        // Slow path: read bit by bit
        let mut value = 0u32;
        for i in 0..count {
            let bit = self.read_bit()?;
            value |= (bit as u32) << i;
        }
        Ok(value)
    }

    /// Peek up to `count` bits without consuming them.
    ///
    /// Returns the bits (LSB-first composed, zero-padded) and how many were
    /// actually available. Near the end of the stream fewer than `count`
    /// bits may remain.
    pub fn peek_bits(&self, count: u8) -> (u32, u8) {
        debug_assert!(count <= 16);

        let mut value = 0u32;
        let mut got = 0u8;
        let mut byte_pos = self.byte_pos;
        let mut bit_pos = self.bit_pos;

        while got < count && byte_pos < self.data.len() {
            let take = (8 - bit_pos).min(count - got);
            let bits = ((self.data[byte_pos] >> bit_pos) as u32) & ((1u32 << take) - 1);
            value |= bits << got;
            got += take;
            bit_pos += take;
            if bit_pos == 8 {
                bit_pos = 0;
                byte_pos += 1;
            }
        }

        (value, got)
    }

    /// Align to next byte boundary, discarding any partially-consumed byte.
    /// Idempotent when already aligned.
    #[inline]
    pub fn align_to_byte(&mut self) {
        if self.bit_pos != 0 {
            self.byte_pos += 1;
            self.bit_pos = 0;
        }
    }

    /// Read a byte (must be byte-aligned)
    #[inline]
    pub fn read_byte(&mut self) -> InflateResult<u8> {
        debug_assert_eq!(self.bit_pos, 0, "read_byte requires byte alignment");
        if self.byte_pos >= self.data.len() {
            return Err(self.truncated());
        }
        let byte = self.data[self.byte_pos];
        self.byte_pos += 1;
        Ok(byte)
    }

    /// Read a 16-bit little-endian value (byte-aligned)
    #[inline]
    pub fn read_u16_le(&mut self) -> InflateResult<u16> {
        let lo = self.read_byte()? as u16;
        let hi = self.read_byte()? as u16;
        Ok(lo | (hi << 8))
    }
}
