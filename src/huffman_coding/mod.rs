//! The huffman module builds the optimal prefix code for a set of symbol frequencies.
//!
//! Tree construction is greedy: the two lightest fragments are merged until one tree remains.
//! Equal weights are ordered by the smallest symbol each fragment holds, so the same frequencies
//! always give the same tree, and so the same codes.
//!
//! The tree itself is only an intermediate. Once the code table is derived it can be dropped.
//!
pub mod code_table;
pub mod huffman;
