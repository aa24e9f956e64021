use std::cmp::Ordering;

use log::trace;

use super::code_table::{Code, CodeTable};
use crate::bitstream::bitpacker::BitPacker;
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::PackedBitstream;
use crate::error::HuffError;
use crate::tools::freq_count::freqs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// An internal node owning its zero-branch and one-branch children.
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// A node of the Huffman tree. `seq` is the insertion sequence number and
/// carries the deterministic tie-break: leaves are created in ascending
/// symbol order, internal nodes take the next number at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub weight: u64,
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    pub fn new(weight: u64, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }
}

impl Ord for Node {
    /// Sort by decreasing weight, ties by decreasing sequence number, so the
    /// tail of a sorted pool is always the lightest, first-created node.
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.cmp(&self.weight).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree over every symbol with a nonzero count. Returns
/// None for an empty alphabet and a bare leaf for a one-symbol alphabet.
///
/// The pool starts with one leaf per distinct symbol. Each round merges the
/// two lightest unplaced nodes (first-encountered wins on equal weight) into
/// an internal node carrying their summed weight, until one root remains.
/// The lighter node of each pair becomes the one branch, the other the zero
/// branch.
pub fn build_tree(freqs: &[u64]) -> Option<Node> {
    let mut pool: Vec<Node> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &weight)| weight > 0)
        .enumerate()
        .map(|(seq, (sym, &weight))| Node::new(weight, seq as u32, NodeData::Leaf(sym as u8)))
        .collect();

    let mut seq = pool.len() as u32;
    while pool.len() > 1 {
        // Keep the pool sorted so the two lightest nodes sit at the tail.
        pool.sort_unstable();
        let one = pool.pop().unwrap();
        let zero = pool.pop().unwrap();
        pool.push(Node::new(
            one.weight + zero.weight,
            seq,
            NodeData::Kids(Box::new(zero), Box::new(one)),
        ));
        seq += 1;
    }
    pool.pop()
}

/// Build a code table from the byte frequencies of `data`. An empty input
/// yields an empty table; callers that need at least one code can check with
/// CodeTable::require_non_empty.
pub fn build_code_table(data: &[u8]) -> Result<CodeTable, HuffError> {
    code_table_from_freqs(&freqs(data))
}

/// Build a code table straight from frequency counts indexed by byte value.
pub fn code_table_from_freqs(freqs: &[u64]) -> Result<CodeTable, HuffError> {
    let mut table = CodeTable::new();
    match build_tree(freqs) {
        None => {}
        // A lone leaf never merged, so no tree path assigns it a code. A
        // zero-length code cannot be decoded, so it gets the single bit 0.
        Some(Node {
            node_data: NodeData::Leaf(sym),
            ..
        }) => table.insert(sym, Code { bits: 0, len: 1 }),
        Some(root) => assign_codes(&root, 0, 0, &mut table)?,
    }
    trace!(
        "built {} codes, lengths {}-{}",
        table.len(),
        table.min_len(),
        table.max_len()
    );
    Ok(table)
}

/// Walk the tree from the root, spelling each leaf's code one branch bit at a
/// time. The bit taken nearest the root lands in the most significant
/// position of the code.
fn assign_codes(
    node: &Node,
    bits: u64,
    depth: usize,
    table: &mut CodeTable,
) -> Result<(), HuffError> {
    match &node.node_data {
        NodeData::Kids(zero, one) => {
            assign_codes(zero, bits << 1, depth + 1, table)?;
            assign_codes(one, bits << 1 | 1, depth + 1, table)
        }
        NodeData::Leaf(sym) => {
            if depth > 64 {
                return Err(HuffError::CodeOverflow {
                    symbol: *sym,
                    depth,
                });
            }
            table.insert(*sym, Code { bits, len: depth as u8 });
            Ok(())
        }
    }
}

/// Pack `data` into a bitstream using the assigned codes, appending each
/// symbol's code most significant bit first. Fails with UnknownSymbol if the
/// table was built from a different alphabet than `data`.
pub fn encode(data: &[u8], table: &CodeTable) -> Result<PackedBitstream, HuffError> {
    let mut packer = BitPacker::new((data.len() * table.max_len() as usize + 7) / 8);
    for &sym in data {
        let code = table.code(sym).ok_or(HuffError::UnknownSymbol(sym))?;
        packer.push_bits(code.bits, code.len);
    }
    trace!(
        "packed {} symbols into {} bits, ending at {}",
        data.len(),
        packer.bit_count(),
        packer.loc()
    );
    Ok(packer.into_bitstream())
}

/// Reconstruct the original symbol sequence from a packed bitstream and the
/// code table it was packed with.
///
/// At each cursor position, candidate lengths from the table's shortest code
/// up to its longest (capped by the bits remaining) are probed against the
/// table. The code set is prefix-free, so at most one candidate can match and
/// the probe order cannot change the result. No match means the stream is
/// corrupt or mismatched with the table, as does decoding to a different
/// symbol count than `expected_count` when one is supplied.
pub fn decode(
    stream: &PackedBitstream,
    table: &CodeTable,
    expected_count: Option<usize>,
) -> Result<Vec<u8>, HuffError> {
    if table.is_empty() && !stream.is_empty() {
        return Err(HuffError::CorruptStream { bit_offset: 0 });
    }
    let mut reader = BitReader::new(&stream.data, stream.bit_count);
    let mut output: Vec<u8> = Vec::with_capacity(
        expected_count.unwrap_or(stream.bit_count / table.max_len().max(1) as usize),
    );

    while !reader.at_end() {
        let longest = (table.max_len() as usize).min(reader.remaining()) as u8;
        let mut matched = false;
        for len in table.min_len()..=longest {
            if let Some(sym) = table.symbol_for(len, reader.peek(len)) {
                output.push(sym);
                reader.advance(len);
                matched = true;
                break;
            }
        }
        if !matched {
            return Err(HuffError::CorruptStream {
                bit_offset: reader.pos(),
            });
        }
    }

    if let Some(expected) = expected_count {
        if output.len() != expected {
            return Err(HuffError::CorruptStream {
                bit_offset: reader.pos(),
            });
        }
    }
    Ok(output)
}
