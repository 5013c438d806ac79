//! The bitstream module turns code tables into packed bytes and back.
//!
//! Bits are packed most significant bit first. The final byte is padded with zeros, and those
//! padding bits carry no meaning: a decoder must be told how many symbols to produce, since the
//! pad bits can themselves look like a valid code.
//!
//! Packing and unpacking only read the code table, so one table can serve any number of calls
//! from any number of threads.
//!
pub mod bit_string;
pub mod bitpacker;
pub mod bitreader;
pub mod decoder;
