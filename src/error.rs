//! Error kinds surfaced by the Huffman coding core.
//!
//! All operations in this crate are deterministic and pure functions of their
//! inputs, so no error is ever retried internally. Each kind is raised at the
//! point of detection and handed back to the caller.

use std::fmt::{Display, Formatter};

/// Errors raised by table construction, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// A code table was required but the alphabet was empty.
    EmptyAlphabet,
    /// Encode found an input byte with no entry in the code table. This is a
    /// table/input pairing bug in the caller, not a data error.
    UnknownSymbol(u8),
    /// Decode found no valid code of any length at the given bit offset.
    /// The stream is corrupt or truncated, or the wrong table was supplied.
    CorruptStream { bit_offset: usize },
    /// A leaf sits deeper in the tree than the code value width (64 bits)
    /// can express. Surfaced rather than silently truncating the code.
    CodeOverflow { symbol: u8, depth: usize },
}

impl Display for HuffError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HuffError::EmptyAlphabet => write!(f, "no symbols to build a code table from"),
            HuffError::UnknownSymbol(sym) => {
                write!(f, "symbol {:#04x} has no entry in the code table", sym)
            }
            HuffError::CorruptStream { bit_offset } => {
                write!(f, "no code matches the stream at bit offset {}", bit_offset)
            }
            HuffError::CodeOverflow { symbol, depth } => {
                write!(
                    f,
                    "code for symbol {:#04x} is {} bits deep, exceeding the 64 bit code width",
                    symbol, depth
                )
            }
        }
    }
}

impl std::error::Error for HuffError {}

impl From<HuffError> for std::io::Error {
    fn from(err: HuffError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}
