//! Human readable view of the logical bitstream: one '0' or '1' character per bit, no padding.

use crate::error::{CodecError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::Symbol;

use super::decoder::Decoder;

/// Concatenate the codes of `sequence` into a string of '0' and '1'.
pub fn bit_string<S, I>(sequence: I, table: &CodeTable<S>) -> Result<String>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut out = String::new();
    for (position, symbol) in sequence.into_iter().enumerate() {
        let code = table.get(&symbol).ok_or_else(|| CodecError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
            position,
        })?;
        out.push_str(&code.to_string());
    }
    Ok(out)
}

/// Decode `expected` symbols from a string of '0' and '1'.
pub fn from_bit_string<S: Symbol>(
    bits: &str,
    table: &CodeTable<S>,
    expected: usize,
) -> Result<Vec<S>> {
    let digits = bits
        .chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(CodecError::MalformedCode(bits.to_string())),
        })
        .collect::<Result<Vec<u8>>>()?;
    Decoder::new(table)?.decode_bits(digits, expected)
}

#[cfg(test)]
mod test {
    use super::{bit_string, from_bit_string};
    use crate::error::CodecError;
    use crate::huffman_coding::code_table::CodeTable;

    fn table() -> CodeTable<char> {
        CodeTable::from_entries([
            ('a', "0".parse().unwrap()),
            ('b', "10".parse().unwrap()),
            ('c', "110".parse().unwrap()),
            ('d', "111".parse().unwrap()),
        ])
        .unwrap()
    }

    #[test]
    fn bit_string_test() {
        assert_eq!(bit_string("abcd".chars(), &table()).unwrap(), "010110111");
        assert_eq!(bit_string("".chars(), &table()).unwrap(), "");
    }

    #[test]
    fn from_bit_string_test() {
        assert_eq!(
            from_bit_string("010110111", &table(), 4).unwrap(),
            vec!['a', 'b', 'c', 'd']
        );
    }

    #[test]
    fn errors_test() {
        assert_eq!(
            from_bit_string("01x", &table(), 2),
            Err(CodecError::MalformedCode("01x".to_string()))
        );
        assert_eq!(
            bit_string("ae".chars(), &table()),
            Err(CodecError::UnknownSymbol {
                symbol: "'e'".to_string(),
                position: 1
            })
        );
        assert_eq!(
            from_bit_string("0101", &table(), 3),
            Err(CodecError::TruncatedStream {
                decoded: 2,
                expected: 3
            })
        );
    }
}
