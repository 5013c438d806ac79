//! BitReader: reads a packed buffer one bit at a time, most significant bit of each byte first.
//!
//! The reader knows nothing about padding. It happily returns the zero bits at the end of the
//! last byte, so callers must know how much of the stream is meaningful.

const BIT_MASK: u8 = 0xff;

/// Reads bits out of a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<u8> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<u8> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = (byte & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
