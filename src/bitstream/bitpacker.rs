use super::PackedBitstream;

/// Packs variable-length bit runs into a byte buffer, most significant bit
/// first. Codes of any length up to 64 bits are written across byte
/// boundaries with no over-allocation of the buffer. Call flush() (or
/// into_bitstream(), which flushes) before using the output.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total meaningful bits written, excluding flush padding.
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified.
    /// Suggest the size be set to the expected coded size in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function. Drains all full bytes from the
    /// queue into the output buffer, leaving 0-7 bits behind.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append the `len` least significant bits of `bits` to the stream, most
    /// significant of those bits first. `len` may be 0-64; longer runs are
    /// queued in chunks so the 64 bit queue can never overflow.
    pub fn push_bits(&mut self, bits: u64, len: u8) {
        debug_assert!(len <= 64);
        self.bit_count += len as usize;
        let mut remaining = len;
        while remaining > 0 {
            // The queue holds at most 7 carried bits, so 24 at a time is safe.
            let take = remaining.min(24);
            let chunk = (bits >> (remaining - take)) & (u64::MAX >> (64 - take));
            self.queue <<= take;
            self.queue |= chunk;
            self.q_bits += take;
            self.write_stream();
            remaining -= take;
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least signficant bits of the last byte. The pad bits are not
    /// counted in bit_count().
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            let byte = (self.queue << (8 - self.q_bits)) as u8;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Number of meaningful bits written so far (padding excluded).
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flush and convert into the finished PackedBitstream.
    pub fn into_bitstream(mut self) -> PackedBitstream {
        self.flush();
        PackedBitstream {
            data: self.output,
            bit_count: self.bit_count,
        }
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", self.bit_count / 8, self.bit_count % 8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn push_bits_byte_aligned_test() {
        let mut bp = BitPacker::new(100);
        bp.push_bits(0b00100001, 8);
        bp.push_bits(0b00100000, 8);
        bp.flush();
        assert_eq!(bp.output, "! ".as_bytes());
        assert_eq!(bp.bit_count(), 16);
    }

    #[test]
    fn push_bits_across_boundary_test() {
        let mut bp = BitPacker::new(100);
        bp.push_bits(0b101, 3);
        bp.push_bits(0b0000011, 7);
        bp.flush();
        // 101_0000011 padded with six zeros
        assert_eq!(bp.output, vec![0b1010_0000, 0b1100_0000]);
        assert_eq!(bp.bit_count(), 10);
    }

    #[test]
    fn push_bits_long_run_test() {
        let mut bp = BitPacker::new(100);
        bp.push_bits(0b1, 1);
        bp.push_bits(u64::MAX, 64);
        bp.flush();
        assert_eq!(
            bp.output,
            vec![255, 255, 255, 255, 255, 255, 255, 255, 0b1000_0000]
        );
        assert_eq!(bp.bit_count(), 65);
    }

    #[test]
    fn zero_length_push_test() {
        let mut bp = BitPacker::new(10);
        bp.push_bits(0, 0);
        bp.flush();
        assert!(bp.output.is_empty());
        assert_eq!(bp.bit_count(), 0);
    }

    #[test]
    fn into_bitstream_test() {
        let mut bp = BitPacker::new(10);
        bp.push_bits(0b0011101100, 10);
        let stream = bp.into_bitstream();
        assert_eq!(stream.data, vec![0b0011_1011, 0b0000_0000]);
        assert_eq!(stream.bit_count, 10);
        assert_eq!(stream.padding(), 6);
    }

    #[test]
    fn loc_test() {
        let mut bp = BitPacker::new(10);
        bp.push_bits(0b110, 3);
        bp.push_bits(0xff, 8);
        assert_eq!(bp.loc(), "[1.3]");
    }
}
