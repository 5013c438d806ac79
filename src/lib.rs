//! Huffman coding of symbol sequences.
//!
//! Version 0.1.0
//!
//! Computes an optimal prefix-free binary code for the symbols of an input sequence, packs the
//! sequence into a bit-exact byte buffer with that code, and restores it again.
//!
//! The pipeline is five calls:
//!
//! ```
//! use huffpack::{build, count, derive, pack, unpack};
//!
//! let text = "abracadabra";
//! let freq = count(text.chars());
//! let table = derive(&build(&freq)?);
//! let packed = pack(text.chars(), &table)?;
//! let restored: String = unpack(&packed, &table, text.chars().count())?.into_iter().collect();
//! assert_eq!(restored, text);
//! # Ok::<(), huffpack::CodecError>(())
//! ```
//!
//! The packed buffer carries neither the table nor the symbol count. Whoever stores or sends it
//! must carry both alongside.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitpacker::pack;
pub use bitstream::decoder::unpack;
pub use error::{CodecError, Result};
pub use huffman_coding::code_table::{derive, Code, CodeTable};
pub use huffman_coding::huffman::{build, HuffmanNode};
pub use tools::freq_count::{count, FrequencyMap};

/// Anything that can be coded: copyable, totally ordered (for tie-breaks) and hashable.
pub trait Symbol: Copy + Ord + std::hash::Hash + std::fmt::Debug {}

impl<T: Copy + Ord + std::hash::Hash + std::fmt::Debug> Symbol for T {}
