//! BitReader: a bounded bit cursor over a packed byte buffer.
//!
//! Reads most-significant-bit-first, matching the BitPacker's convention, and
//! is bounded by the logical bit count of the stream rather than the padded
//! byte length. The decoder leans on peek(): it must test several candidate
//! code lengths at one cursor position before consuming anything.

/// Walks the bits of a packed buffer without consuming past the logical end.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_count: usize,
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`, of which only the first `bit_count` bits
    /// are meaningful. Any trailing bits in the buffer are padding.
    pub fn new(data: &'a [u8], bit_count: usize) -> Self {
        debug_assert!(bit_count <= data.len() * 8);
        Self {
            data,
            bit_count,
            cursor: 0,
        }
    }

    /// Current bit offset from the start of the stream.
    pub fn pos(&self) -> usize {
        self.cursor
    }

    /// Bits left before the logical end of the stream.
    pub fn remaining(&self) -> usize {
        self.bit_count - self.cursor
    }

    pub fn at_end(&self) -> bool {
        self.cursor == self.bit_count
    }

    /// Return the next `n` bits (MSB first) without advancing the cursor.
    /// `n` must be 1-64 and no more than remaining().
    pub fn peek(&self, n: u8) -> u64 {
        debug_assert!(n >= 1 && n <= 64);
        debug_assert!(n as usize <= self.remaining());
        let end = self.cursor + n as usize;
        let first = self.cursor / 8;
        let last = (end + 7) / 8;
        // At most 9 bytes are touched for a 64 bit read, so a u128
        // accumulator holds the whole window.
        let mut window: u128 = 0;
        for &byte in &self.data[first..last] {
            window = window << 8 | byte as u128;
        }
        let tail = last * 8 - end;
        ((window >> tail) & (u128::MAX >> (128 - n as u32))) as u64
    }

    /// Advance the cursor by `n` bits.
    pub fn advance(&mut self, n: u8) {
        debug_assert!(n as usize <= self.remaining());
        self.cursor += n as usize;
    }

    /// Return the next `n` bits and advance past them.
    pub fn take(&mut self, n: u8) -> u64 {
        let bits = self.peek(n);
        self.advance(n);
        bits
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn peek_within_byte_test() {
        let data = [0b1011_0001];
        let br = BitReader::new(&data, 8);
        assert_eq!(br.peek(1), 1);
        assert_eq!(br.peek(4), 0b1011);
        assert_eq!(br.peek(8), 0b1011_0001);
    }

    #[test]
    fn peek_across_bytes_test() {
        let data = [0b0001_1011, 0b1100_0000];
        let mut br = BitReader::new(&data, 10);
        br.advance(5);
        assert_eq!(br.peek(5), 0b01111);
    }

    #[test]
    fn take_sequence_test() {
        let data = [0b0011_1011, 0b0000_0000];
        let mut br = BitReader::new(&data, 10);
        assert_eq!(br.take(1), 0);
        assert_eq!(br.take(1), 0);
        assert_eq!(br.take(2), 0b11);
        assert_eq!(br.take(3), 0b101);
        assert_eq!(br.take(3), 0b100);
        assert!(br.at_end());
    }

    #[test]
    fn remaining_honors_bit_count_test() {
        let data = [0xff, 0xff];
        let mut br = BitReader::new(&data, 11);
        assert_eq!(br.remaining(), 11);
        br.advance(8);
        assert_eq!(br.remaining(), 3);
        assert!(!br.at_end());
        br.advance(3);
        assert!(br.at_end());
    }

    #[test]
    fn peek_full_width_test() {
        let data = [0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef, 0x80];
        let mut br = BitReader::new(&data, 72);
        br.advance(1);
        assert_eq!(br.peek(64), 0xdeadbeefdeadbeef << 1 | 1);
    }
}
