//! A minimum-redundancy (Huffman) entropy coder for byte data.
//!
//! Builds a prefix-free code table from the byte frequencies of an input,
//! packs the input into a dense bitstream with those codes, and unpacks the
//! bitstream back to the exact original bytes.
//!
//! The coder is a pure in-memory core: it never reads files, never writes a
//! container format, and only reports intermediate state at trace level. The
//! `huffman` binary is a thin collaborator that feeds it a file and reports
//! statistics.
//!
//! Basic usage:
//!
//! ```no_run
//! use huffman::huffman_coding::huffman::{build_code_table, decode, encode};
//!
//! let data = b"abbcccddddeeeeeffffff";
//! let table = build_code_table(data).unwrap();
//! let packed = encode(data, &table).unwrap();
//! let restored = decode(&packed, &table, Some(data.len())).unwrap();
//! assert_eq!(restored, data);
//! ```
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;
