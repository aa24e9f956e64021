use rustc_hash::FxHashMap;

use crate::error::HuffError;

/// A single prefix code: the bit pattern, right-aligned in `bits`, and its
/// length. The most significant of the `len` bits corresponds to the branch
/// nearest the tree root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    /// Render the code as a string of '0'/'1' for reporting.
    pub fn bit_string(&self) -> String {
        (0..self.len)
            .map(|i| {
                if self.bits >> (self.len - 1 - i) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

/// The code table maps each symbol to its code and back. It is built once
/// after tree construction and read-only afterwards, so the encoder and
/// decoder (or several of each) can share it freely.
///
/// The reverse map keyed on (length, bits) is the decoder's membership test:
/// a candidate bit window matches at most one entry because the code set is
/// prefix-free.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
    symbols: FxHashMap<(u8, u64), u8>,
    min_len: u8,
    max_len: u8,
}

impl CodeTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, symbol: u8, code: Code) {
        if self.codes.is_empty() {
            self.min_len = code.len;
            self.max_len = code.len;
        } else {
            self.min_len = self.min_len.min(code.len);
            self.max_len = self.max_len.max(code.len);
        }
        self.codes.insert(symbol, code);
        self.symbols.insert((code.len, code.bits), symbol);
    }

    /// The code assigned to `symbol`, if the symbol is in the alphabet.
    pub fn code(&self, symbol: u8) -> Option<Code> {
        self.codes.get(&symbol).copied()
    }

    /// The symbol whose code is exactly the `len` bits in `bits`, if any.
    pub fn symbol_for(&self, len: u8, bits: u64) -> Option<u8> {
        self.symbols.get(&(len, bits)).copied()
    }

    /// Shortest code length in the table (0 when the table is empty).
    pub fn min_len(&self) -> u8 {
        self.min_len
    }

    /// Longest code length in the table (0 when the table is empty).
    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    /// Number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All (symbol, code) entries in ascending symbol order.
    pub fn entries(&self) -> Vec<(u8, Code)> {
        let mut entries: Vec<(u8, Code)> = self.codes.iter().map(|(&s, &c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }

    /// Total coded size in bits for an input with the given frequency counts,
    /// the weighted path length the tree construction minimizes.
    pub fn coded_bits(&self, freqs: &[u64]) -> u64 {
        self.codes
            .iter()
            .map(|(&sym, code)| freqs[sym as usize] * code.len as u64)
            .sum()
    }

    /// For callers that need at least one code in the table.
    pub fn require_non_empty(&self) -> Result<(), HuffError> {
        if self.is_empty() {
            return Err(HuffError::EmptyAlphabet);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Code, CodeTable};
    use crate::error::HuffError;

    #[test]
    fn insert_and_lookup_test() {
        let mut table = CodeTable::new();
        table.insert(b'a', Code { bits: 0b0, len: 1 });
        table.insert(b'b', Code { bits: 0b11, len: 2 });

        assert_eq!(table.code(b'a'), Some(Code { bits: 0, len: 1 }));
        assert_eq!(table.symbol_for(2, 0b11), Some(b'b'));
        assert_eq!(table.symbol_for(1, 0b1), None);
        assert_eq!(table.code(b'z'), None);
    }

    #[test]
    fn min_max_len_test() {
        let mut table = CodeTable::new();
        assert_eq!(table.min_len(), 0);
        assert_eq!(table.max_len(), 0);

        table.insert(b'x', Code { bits: 0b10, len: 2 });
        assert_eq!((table.min_len(), table.max_len()), (2, 2));
        table.insert(b'y', Code { bits: 0b0, len: 1 });
        table.insert(b'z', Code { bits: 0b110, len: 3 });
        assert_eq!((table.min_len(), table.max_len()), (1, 3));
    }

    #[test]
    fn coded_bits_test() {
        let mut table = CodeTable::new();
        table.insert(b'a', Code { bits: 0b0, len: 1 });
        table.insert(b'b', Code { bits: 0b11, len: 2 });
        let mut freqs = vec![0_u64; 256];
        freqs[b'a' as usize] = 5;
        freqs[b'b' as usize] = 3;
        assert_eq!(table.coded_bits(&freqs), 5 + 6);
    }

    #[test]
    fn require_non_empty_test() {
        let table = CodeTable::new();
        assert_eq!(table.require_non_empty(), Err(HuffError::EmptyAlphabet));
    }

    #[test]
    fn bit_string_test() {
        let code = Code { bits: 0b100, len: 3 };
        assert_eq!(code.bit_string(), "100");
        let code = Code { bits: 0, len: 1 };
        assert_eq!(code.bit_string(), "0");
    }
}
