use rayon::prelude::*;

/// Returns a frequency count of the input data, indexed by byte value.
/// Uses parallelism when the data set is over 64k. Counts are u64 so the sum
/// of all frequencies cannot overflow on large inputs.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn small_input_test() {
        let counts = freqs(b"aabcd");
        assert_eq!(counts[b'a' as usize], 2);
        assert_eq!(counts[b'b' as usize], 1);
        assert_eq!(counts[b'c' as usize], 1);
        assert_eq!(counts[b'd' as usize], 1);
        assert_eq!(counts.iter().sum::<u64>(), 5);
    }

    #[test]
    fn empty_input_test() {
        let counts = freqs(&[]);
        assert_eq!(counts, vec![0_u64; 256]);
    }

    #[test]
    fn parallel_path_matches_serial_test() {
        // Force the rayon path with >64k of data and compare against the
        // serial count of the same bytes.
        let data: Vec<u8> = (0..100_000_u32).map(|i| (i % 251) as u8).collect();
        let parallel = freqs(&data);
        let mut serial = vec![0_u64; 256];
        data.iter().for_each(|&el| serial[el as usize] += 1);
        assert_eq!(parallel, serial);
    }
}
