//! Sliding window for LZ77 back-references.
//!
//! DEFLATE output is conceptually unbounded, but only the most recent
//! 32KB is addressable as a copy source. The window is a fixed
//! power-of-two circular buffer; decoded bytes stream out through the
//! caller's writer while the buffer retains the addressable tail.

use std::io::Write;

use crate::error::{InflateError, InflateResult};
use crate::inflate_tables::{MAX_MATCH_LENGTH, WINDOW_SIZE};

/// Sliding window for LZ77 decoding
pub struct SlidingWindow {
    buffer: Vec<u8>,
    pos: usize,
    total_output: usize,
}

impl SlidingWindow {
    pub fn new() -> Self {
        Self {
            buffer: vec![0u8; WINDOW_SIZE],
            pos: 0,
            total_output: 0,
        }
    }

    /// Output a literal byte
    #[inline]
    pub fn push_literal<W: Write>(&mut self, byte: u8, writer: &mut W) -> InflateResult<()> {
        self.buffer[self.pos] = byte;
        self.pos = (self.pos + 1) & (WINDOW_SIZE - 1);
        self.total_output += 1;
        writer.write_all(&[byte])?;
        Ok(())
    }

    /// Copy `length` bytes from `distance` bytes back.
    ///
    /// The copy proceeds byte by byte in forward order: when the source
    /// and destination ranges overlap (distance < length) each copied
    /// byte becomes source material for the bytes after it, which is how
    /// DEFLATE expresses run-length repeats.
    #[inline]
    pub fn copy_match<W: Write>(
        &mut self,
        distance: usize,
        length: usize,
        writer: &mut W,
    ) -> InflateResult<()> {
        debug_assert!(length <= MAX_MATCH_LENGTH);

        let available = self.total_output.min(WINDOW_SIZE);
        if distance == 0 || distance > available {
            return Err(InflateError::InvalidDistance {
                distance,
                available,
            });
        }

        let mut src = (self.pos + WINDOW_SIZE - distance) & (WINDOW_SIZE - 1);
        let mut staged = [0u8; MAX_MATCH_LENGTH];

        for slot in staged.iter_mut().take(length) {
            let byte = self.buffer[src];
            *slot = byte;
            self.buffer[self.pos] = byte;
            self.pos = (self.pos + 1) & (WINDOW_SIZE - 1);
            src = (src + 1) & (WINDOW_SIZE - 1);
        }

        self.total_output += length;
        writer.write_all(&staged[..length])?;
        Ok(())
    }

    /// Total bytes output so far
    #[inline]
    pub fn total_output(&self) -> usize {
        self.total_output
    }
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new()
    }
}
