use std::fmt;
use std::io;
use thiserror::Error;

/// Errors produced while decoding a raw DEFLATE stream.
///
/// All variants are terminal. DEFLATE has no resynchronization mechanism,
/// so the first malformed field invalidates the remainder of the stream;
/// nothing is retried or locally recovered.
#[derive(Error, Debug)]
pub enum InflateError {
    #[error("unexpected end of input at bit {bit_offset}")]
    TruncatedInput { bit_offset: u64 },

    #[error("reserved block type {btype} at bit {bit_offset}")]
    InvalidBlockType { btype: u8, bit_offset: u64 },

    #[error("stored block length check failed: LEN={len:#06x} NLEN={nlen:#06x}")]
    InvalidStoredBlock { len: u16, nlen: u16 },

    #[error("invalid Huffman code at bit {bit_offset}")]
    InvalidHuffmanCode { bit_offset: u64 },

    #[error("malformed dynamic block header: {0}")]
    InvalidBlockHeader(String),

    #[error("invalid length/distance symbol {0}")]
    InvalidLengthCode(u16),

    #[error("back-reference distance {distance} exceeds {available} bytes of history")]
    InvalidDistance { distance: usize, available: usize },

    #[error("write error: {0}")]
    Io(#[from] io::Error),
}

impl InflateError {
    pub(crate) fn header<T: fmt::Display>(msg: T) -> Self {
        InflateError::InvalidBlockHeader(msg.to_string())
    }
}

pub type InflateResult<T> = Result<T, InflateError>;
