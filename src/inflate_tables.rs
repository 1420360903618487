//! Constant alphabets from RFC 1951.
//!
//! Every decoder path consumes these: base/extra-bit tables for the
//! length and distance alphabets, and the fixed transmission order of
//! the code-length code lengths in dynamic block headers.

/// Maximum back-reference distance (32KB)
pub const WINDOW_SIZE: usize = 32 * 1024;

/// Maximum match length
pub const MAX_MATCH_LENGTH: usize = 258;

/// End of block symbol
pub const END_OF_BLOCK: u16 = 256;

/// Maximum bits in any Huffman code
pub const MAX_CODE_LEN: usize = 15;

/// Highest valid literal/length symbol (286 and 287 never appear in data)
pub const NUM_LITLEN_CODES: usize = 286;

/// Highest valid distance symbol
pub const NUM_DIST_CODES: usize = 30;

/// Base lengths for length codes 257-285
pub static LEN_START: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258,
];

/// Extra bits for length codes 257-285
pub static LEN_EXTRA_BITS: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Base distances for distance codes 0-29
pub static DIST_START: [u16; 30] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];

/// Extra bits for distance codes 0-29
pub static DIST_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];

/// Code length alphabet transmission order for dynamic Huffman headers
pub static CODELEN_ORDER: [usize; 19] = [
    16, 17, 18, 0, 8, 7, 9, 6, 10, 5, 11, 4, 12, 3, 13, 2, 14, 1, 15,
];
