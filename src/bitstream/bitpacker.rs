use log::{debug, error};

use crate::error::{CodecError, Result};
use crate::huffman_coding::code_table::{Code, CodeTable};
use crate::Symbol;

/// Packs code bits MSB first into a byte buffer.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call flush() to push
    /// the last partial byte into the buffer before using the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Move every full byte in the queue into the output buffer.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Put a single bit on the stream. Any non-zero value writes a 1.
    pub fn out_bit(&mut self, bit: u8) {
        self.queue = (self.queue << 1) | u64::from(bit != 0);
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Put every digit of a code on the stream, first digit first.
    pub fn out_code(&mut self, code: &Code) {
        code.bits().iter().for_each(|&b| self.out_bit(b));
    }

    /// Number of bits written so far, padding excluded.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }
}

/// Encode `sequence` with `table` and pack the bits into bytes, zero padding the final byte.
///
/// The buffer does not record how many symbols it holds; the caller has to carry that.
pub fn pack<S, I>(sequence: I, table: &CodeTable<S>) -> Result<Vec<u8>>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut bp = BitPacker::new(0);
    for (position, symbol) in sequence.into_iter().enumerate() {
        match table.get(&symbol) {
            Some(code) => bp.out_code(code),
            None => {
                return Err(CodecError::UnknownSymbol {
                    symbol: format!("{:?}", symbol),
                    position,
                })
            }
        }
    }
    bp.flush();
    debug!(
        "Packed {} bits into {} bytes",
        bp.bit_count(),
        bp.output.len()
    );
    Ok(bp.output)
}

#[cfg(test)]
mod test {
    use super::{pack, BitPacker};
    use crate::error::CodecError;
    use crate::huffman_coding::code_table::{Code, CodeTable};

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn out_bit_test() {
        let mut bp = BitPacker::new(4);
        [0, 0, 1, 0, 0, 0, 0, 1].iter().for_each(|&b| bp.out_bit(b));
        bp.flush();
        assert_eq!(bp.output, "!".as_bytes());
    }

    #[test]
    fn out_code_test() {
        let mut bp = BitPacker::new(4);
        bp.out_code(&code("1011"));
        assert_eq!(bp.bit_count(), 4);
        assert!(bp.output.is_empty());
        bp.out_code(&code("0000011"));
        assert_eq!(bp.output, vec![0b1011_0000]);
        bp.flush();
        assert_eq!(bp.output, vec![0b1011_0000, 0b0110_0000]);
        assert_eq!(bp.bit_count(), 11);
    }

    #[test]
    fn long_code_test() {
        let mut bp = BitPacker::new(16);
        let long = code(&"1".repeat(70));
        bp.out_code(&long);
        bp.flush();
        assert_eq!(bp.output.len(), 9);
        assert!(bp.output[..8].iter().all(|&b| b == 0xff));
        assert_eq!(bp.output[8], 0b1111_1100);
    }

    #[test]
    fn pack_test() {
        let table = CodeTable::from_entries([
            ('a', code("0")),
            ('b', code("10")),
            ('c', code("110")),
            ('d', code("111")),
        ])
        .unwrap();
        // 0 10 110 111 -> 01011011 1(0000000)
        assert_eq!(
            pack("abcd".chars(), &table).unwrap(),
            vec![0b0101_1011, 0b1000_0000]
        );
        assert_eq!(pack("".chars(), &table).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn degenerate_test() {
        let table = CodeTable::from_entries([('z', code("0"))]).unwrap();
        assert_eq!(pack("z".repeat(8).chars(), &table).unwrap(), vec![0]);
        assert_eq!(pack("z".repeat(9).chars(), &table).unwrap(), vec![0, 0]);
    }

    #[test]
    fn unknown_symbol_test() {
        let table = CodeTable::from_entries([('a', code("0")), ('b', code("1"))]).unwrap();
        assert_eq!(
            pack("abx".chars(), &table),
            Err(CodecError::UnknownSymbol {
                symbol: "'x'".to_string(),
                position: 2
            })
        );
    }
}
