//! Code table derivation. Walks a finished Huffman tree and records the path to every leaf.
//!
//! Left edges append a 0, right edges a 1. A tree that is only a leaf gets the code "0", since an
//! empty code could never be read back out of a packed stream.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::HuffmanNode;
use crate::error::{CodecError, Result};
use crate::tools::freq_count::FrequencyMap;
use crate::Symbol;

/// One symbol's code, stored as a sequence of 0/1 digits in transmission order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Code {
    bits: Vec<u8>,
}

impl Code {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Append a digit. Any non-zero value is taken as 1.
    pub fn push(&mut self, bit: u8) {
        self.bits.push(u8::from(bit != 0));
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.bits.pop()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The digits, each 0 or 1.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bits
            .iter()
            .try_for_each(|&b| f.write_str(if b == 0 { "0" } else { "1" }))
    }
}

impl FromStr for Code {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                _ => Err(CodecError::MalformedCode(s.to_string())),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }
}

/// Symbol to code mapping derived from a Huffman tree, or built by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: FxHashMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    /// Build a table from explicit entries. Empty codes are refused. Duplicate codes are
    /// allowed here and rejected by the decoder, which is the only stage they can hurt.
    pub fn from_entries<I: IntoIterator<Item = (S, Code)>>(entries: I) -> Result<Self> {
        let mut codes = FxHashMap::default();
        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(CodecError::EmptyCode {
                    symbol: format!("{:?}", symbol),
                });
            }
            codes.insert(symbol, code);
        }
        Ok(Self { codes })
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }

    /// Entries ordered by symbol, for display.
    pub fn sorted(&self) -> Vec<(S, &Code)> {
        let mut entries: Vec<(S, &Code)> = self.codes.iter().map(|(s, c)| (*s, c)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Length of the longest code, 0 for an empty table.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Total packed bits for a corpus with these frequencies: sum of count times code length.
    /// Symbols missing from the table contribute nothing. Saturates at `u64::MAX`.
    pub fn weighted_length(&self, freq: &FrequencyMap<S>) -> u64 {
        freq.iter()
            .filter_map(|(s, &n)| self.codes.get(s).map(|c| n.saturating_mul(c.len() as u64)))
            .fold(0, u64::saturating_add)
    }

    /// True if no code is a prefix of another code.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.codes.values().collect();
        // After sorting, a prefix sorts directly before the codes that extend it.
        codes.sort_unstable();
        codes.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }
}

/// Derive the code table of a Huffman tree.
pub fn derive<S: Symbol>(root: &HuffmanNode<S>) -> CodeTable<S> {
    let mut codes = FxHashMap::default();
    match root {
        HuffmanNode::Leaf { symbol, .. } => {
            // Lone symbol: the walk never descends, so hand out a one bit code.
            let mut code = Code::new();
            code.push(0);
            codes.insert(*symbol, code);
        }
        HuffmanNode::Internal { .. } => {
            let mut path = Code::new();
            return_leaves(root, &mut path, &mut codes);
        }
    }
    debug!(
        "Derived {} codes, longest is {} bits",
        codes.len(),
        codes.values().map(Code::len).max().unwrap_or(0)
    );
    CodeTable { codes }
}

/// Recursively walk the tree, recording in `codes` the path taken to reach each leaf.
fn return_leaves<S: Symbol>(
    node: &HuffmanNode<S>,
    path: &mut Code,
    codes: &mut FxHashMap<S, Code>,
) {
    match node {
        HuffmanNode::Internal { left, right, .. } => {
            path.push(0);
            return_leaves(left, path, codes);
            path.pop();
            path.push(1);
            return_leaves(right, path, codes);
            path.pop();
        }
        HuffmanNode::Leaf { symbol, .. } => {
            trace!("{:?} -> {}", symbol, path);
            codes.insert(*symbol, path.clone());
        }
    };
}
