//! The huffman_coding module builds the prefix-free code and runs it in both
//! directions.
//!
//! Huffman's greedy algorithm repeatedly merges the two lowest-weight nodes of
//! a pool until a single tree roots every distinct symbol. The depth of each
//! leaf is its code length, and the branch choices on the path from the root
//! spell out its bit pattern. Because every code corresponds to a distinct
//! leaf path, no code is a prefix of another, which is what lets the decoder
//! resolve variable-length codes from a packed stream with no delimiters.
//!
//! The tree shape (and so the exact code values) is only unique once the
//! selection among equal-weight nodes is pinned down. This implementation
//! breaks ties by insertion order, first-encountered wins; see
//! huffman::build_tree for the exact rule.
pub mod code_table;
pub mod huffman;
