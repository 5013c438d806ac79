use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::bitreader::BitReader;
use crate::error::{CodecError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::Symbol;

/// Inverse of a code table, ready to turn bits back into symbols.
#[derive(Debug, Clone)]
pub struct Decoder<'t, S: Symbol> {
    symbols: FxHashMap<&'t [u8], S>,
    max_len: usize,
}

impl<'t, S: Symbol> Decoder<'t, S> {
    /// Invert `table`. Fails if two symbols share a code.
    pub fn new(table: &'t CodeTable<S>) -> Result<Self> {
        let mut symbols = FxHashMap::default();
        // Walk in symbol order so a table with several clashes always reports the same one.
        for (symbol, code) in table.sorted() {
            if symbols.insert(code.bits(), symbol).is_some() {
                return Err(CodecError::AmbiguousTable { code: code.clone() });
            }
        }
        Ok(Self {
            symbols,
            max_len: table.max_len(),
        })
    }

    /// Decode exactly `expected` symbols from a stream of 0/1 digits. Anything after the last
    /// symbol is left unread.
    pub fn decode_bits<I>(&self, bits: I, expected: usize) -> Result<Vec<S>>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut bits = bits.into_iter();
        // Every code is at least one bit, so never reserve more symbols than there are bits.
        let mut output = Vec::with_capacity(expected.min(bits.size_hint().0));
        let mut candidate: Vec<u8> = Vec::with_capacity(self.max_len);
        let mut position = 0;

        while output.len() < expected {
            let bit = match bits.next() {
                Some(bit) => bit,
                None => {
                    return Err(CodecError::TruncatedStream {
                        decoded: output.len(),
                        expected,
                    })
                }
            };
            candidate.push(bit);
            position += 1;

            if let Some(&symbol) = self.symbols.get(candidate.as_slice()) {
                output.push(symbol);
                candidate.clear();
            } else if candidate.len() >= self.max_len {
                // Any further bit would make the prefix longer than every known code.
                trace!("no code matches {:?}", candidate);
                return Err(CodecError::InvalidCode {
                    bit_position: position - 1,
                });
            }
        }
        Ok(output)
    }

    /// Decode exactly `expected` symbols from a packed buffer, ignoring any padding after them.
    pub fn decode(&self, buffer: &[u8], expected: usize) -> Result<Vec<S>> {
        let mut br = BitReader::new(buffer);
        let output = self.decode_bits(std::iter::from_fn(|| br.bit()), expected)?;
        debug!(
            "Unpacked {} symbols from {} bytes, stopped at {}",
            output.len(),
            buffer.len(),
            br.loc()
        );
        Ok(output)
    }
}

/// Restore `expected_symbol_count` symbols from a buffer produced by `pack` with the same table.
///
/// An unmatched prefix that reaches the longest code length is reported as `InvalidCode` at
/// once, even at the end of the buffer, since no further bit could ever complete it.
pub fn unpack<S: Symbol>(
    buffer: &[u8],
    table: &CodeTable<S>,
    expected_symbol_count: usize,
) -> Result<Vec<S>> {
    Decoder::new(table)?.decode(buffer, expected_symbol_count)
}
