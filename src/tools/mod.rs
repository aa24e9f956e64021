//! The tools module provides helper functions for the Huffman coder.
//!
//! The tools are:
//! - cli: Command line interface for the demo binary.
//! - freq_count: Frequency count over the byte alphabet.
pub mod cli;
pub mod freq_count;
