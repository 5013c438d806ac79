use std::fs::{self, File};
use std::io::{self, Write};

use log::{debug, info, warn};

use crate::bitstream::bit_string::bit_string;
use crate::bitstream::bitpacker::pack;
use crate::bitstream::decoder::unpack;
use crate::huffman_coding::code_table::derive;
use crate::huffman_coding::huffman::build;
use crate::tools::cli::HuffOpts;
use crate::tools::freq_count::count;
use crate::tools::report::{code_table_lines, Summary};

/*
    The compressed file is only the packed bits. The code table and the character
    count never leave memory, so the restore half of this run is the only thing that
    can read the file back. A container that carries both is a separate concern.
*/

/// Compress the input file defined in opts, write the packed bytes, then read them back and
/// write the restored text. Fails if the restored text differs from the input.
pub fn compress(opts: &HuffOpts) -> io::Result<Summary> {
    let text = fs::read_to_string(&opts.input)?;
    let symbols = text.chars().count();

    if symbols == 0 {
        warn!("{} is empty, nothing to encode", opts.input);
        write_file(&opts.compressed, &[])?;
        write_file(&opts.extracted, &[])?;
        return Ok(Summary::default());
    }

    // Count, build the tree, and keep only the code table.
    let freq = count(text.chars());
    let root = build(&freq)?;
    if root.is_leaf() {
        warn!("Only one distinct character, every code is a single bit");
    }
    debug!(
        "Tree has {} leaves and depth {}",
        root.leaf_count(),
        root.depth()
    );
    let table = derive(&root);
    drop(root);

    if opts.show_table {
        println!("Code table:");
        code_table_lines(&table, &freq)
            .iter()
            .for_each(|line| println!("{}", line));
    }

    let packed = pack(text.chars(), &table)?;
    if opts.show_bits {
        println!("Bits:\n{}", bit_string(text.chars(), &table)?);
    }
    write_file(&opts.compressed, &packed)?;
    info!("Wrote {} bytes to {}", packed.len(), opts.compressed);

    // Read the packed bytes back and restore them with the same table.
    let stored = fs::read(&opts.compressed)?;
    let restored: String = unpack(&stored, &table, symbols)?.into_iter().collect();
    if restored != text {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "restored text does not match the input",
        ));
    }
    write_file(&opts.extracted, restored.as_bytes())?;
    info!("Wrote restored text to {}", opts.extracted);

    let summary = Summary {
        symbols,
        distinct: freq.len(),
        input_bytes: text.len(),
        bits: table.weighted_length(&freq),
        packed_bytes: packed.len(),
    };
    info!("{}", summary);
    Ok(summary)
}

fn write_file(fname: &str, data: &[u8]) -> io::Result<()> {
    let mut f_out = File::create(fname)?;
    f_out.write_all(data)
}
