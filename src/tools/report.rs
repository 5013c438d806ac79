use std::fmt::{Display, Formatter};

use crate::huffman_coding::code_table::CodeTable;
use crate::tools::freq_count::FrequencyMap;
use crate::Symbol;

/// One line per symbol, in symbol order: the symbol, its count and its code.
pub fn code_table_lines<S: Symbol>(table: &CodeTable<S>, freq: &FrequencyMap<S>) -> Vec<String> {
    table
        .sorted()
        .into_iter()
        .map(|(symbol, code)| {
            format!(
                "{:>8}  x{:<8} {}",
                format!("{:?}", symbol),
                freq.get(&symbol).unwrap_or(0),
                code
            )
        })
        .collect()
}

/// Outcome of one compression run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Symbols in the input
    pub symbols: usize,
    /// Distinct symbols in the input
    pub distinct: usize,
    /// Size of the input in bytes
    pub input_bytes: usize,
    /// Meaningful bits in the packed buffer
    pub bits: u64,
    /// Size of the packed buffer
    pub packed_bytes: usize,
}

impl Summary {
    /// Average code length per symbol, 0 for empty input.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            self.bits as f64 / self.symbols as f64
        }
    }

    /// Packed size as a fraction of the input size, 0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.packed_bytes as f64 / self.input_bytes as f64
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} symbols ({} distinct), {} bits, {} -> {} bytes, {:.3} bits/symbol, ratio {:.3}",
            self.symbols,
            self.distinct,
            self.bits,
            self.input_bytes,
            self.packed_bytes,
            self.bits_per_symbol(),
            self.ratio()
        )
    }
}
