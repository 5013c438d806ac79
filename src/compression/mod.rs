//! The compression module drives a whole file through the coder.
//!
//! The steps are:
//! - Read the input text and count its characters.
//! - Build the Huffman tree and derive the code table.
//! - Pack the text and write the bytes to the compressed file.
//! - Read the bytes back, unpack them with the same table and write the restored text.
//!
//! The compressed file holds only the packed bits. The code table and the character count stay
//! in memory, so the restored file can only be produced by the same run.
//!

pub mod compress;
