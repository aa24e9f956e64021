//! The bitstream module is the bit-level plumbing for the Huffman coder.
//!
//! Huffman codes are variable-length bit patterns with no delimiters, so both
//! sides of the coder need to move sub-byte quantities across byte boundaries.
//! The BitPacker assembles codes into a padded byte buffer, and the BitReader
//! walks the packed bytes one candidate code at a time.
//!
//! Both ends track the logical bit count separately from the byte length. The
//! final byte of a packed stream is zero-padded on its low-order end, and the
//! pad bits must never be mistaken for code bits.
pub mod bitpacker;
pub mod bitreader;

/// A packed bitstream: the padded byte buffer plus the exact number of
/// meaningful bits in it. `data.len()` is always `bit_count` rounded up to a
/// whole byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitstream {
    pub data: Vec<u8>,
    pub bit_count: usize,
}

impl PackedBitstream {
    /// Number of pad bits in the final byte (0-7).
    pub fn padding(&self) -> u8 {
        (self.data.len() * 8 - self.bit_count) as u8
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }
}
