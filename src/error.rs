//! Error type shared by every stage of the coder.
//!
//! Each failure is local and reported straight back to the caller. Nothing here is retryable:
//! the same inputs will fail the same way.

use thiserror::Error;

use crate::huffman_coding::code_table::Code;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Tree construction was asked to work on a frequency map with no symbols.
    #[error("empty alphabet: cannot build a tree from an empty frequency map")]
    EmptyAlphabet,

    /// Two fragment weights added up to more than a u64 can hold.
    #[error("weight overflow: {left} + {right} does not fit in 64 bits")]
    WeightOverflow { left: u64, right: u64 },

    /// The packer met a symbol the code table knows nothing about.
    #[error("symbol {symbol} at position {position} has no code in the table")]
    UnknownSymbol { symbol: String, position: usize },

    /// Two symbols in a table share the same code.
    #[error("ambiguous table: code {code} is assigned to more than one symbol")]
    AmbiguousTable { code: Code },

    /// The packed buffer ran out before enough symbols were decoded.
    #[error("truncated stream: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: usize, expected: usize },

    /// The accumulated bits outgrew the longest code without matching one.
    #[error("invalid code ending at bit {bit_position}")]
    InvalidCode { bit_position: usize },

    /// A hand-built table entry with no digits.
    #[error("symbol {symbol} has an empty code")]
    EmptyCode { symbol: String },

    /// A code string held something other than '0' or '1'.
    #[error("malformed code string {0:?}")]
    MalformedCode(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl From<CodecError> for std::io::Error {
    fn from(e: CodecError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
