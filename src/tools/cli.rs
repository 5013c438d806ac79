use clap::Parser;
use log::{debug, info};
use std::{fmt::Display, fmt::Formatter};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Verbosity {
    /// Map the counts of -q and -v flags onto a level. No flags leaves the default of Info.
    /// Each -q steps down one level and wins over any -v.
    pub fn from_counts(q: u8, v: u8) -> Self {
        match (q, v) {
            (0, 0) => Verbosity::Info,
            (0, 1) => Verbosity::Debug,
            (0, _) => Verbosity::Trace,
            (1, _) => Verbosity::Warnings,
            (2, _) => Verbosity::Errors,
            _ => Verbosity::Quiet,
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Everything the driver needs to know to run.
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Text file to compress
    pub input: String,
    /// Where the packed bytes are written
    pub compressed: String,
    /// Where the restored text is written
    pub extracted: String,
    /// Print the code table
    pub show_table: bool,
    /// Print the logical bitstream as 0/1 characters
    pub show_bits: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            compressed: String::new(),
            extracted: String::new(),
            show_table: false,
            show_bits: false,
            verbose: Verbosity::Info,
        }
    }

    /// Options for `input` with the default output names beside it.
    pub fn for_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            compressed: format!("{}.huf", input),
            extracted: format!("{}.out", input),
            ..Self::new()
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::for_input(&args.filename);
        if let Some(out) = args.output {
            opts.compressed = out;
        }
        if let Some(out) = args.extract {
            opts.extracted = out;
        }
        opts.show_table = args.table;
        opts.show_bits = args.bits;
        opts.verbose = Verbosity::from_counts(args.quiet, args.v);
        opts
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman-code a text file, write the packed bytes, and restore it",
    long_about = "
    Counts the characters of the input file, builds an optimal prefix code for them,
    and packs the text into bytes with that code. The packed bytes are then read back
    and restored with the same code table to prove the round trip.

    The compressed file holds only the packed bits. Use --table to see the codes."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Compressed output file (default: <filename>.huf)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Restored output file (default: <filename>.out)
    #[clap(short = 'x', long = "extract")]
    extract: Option<String>,

    /// Print the code table
    #[clap(short = 't', long = "table")]
    table: bool,

    /// Print the encoded bits as 0/1 characters
    #[clap(short = 'b', long = "bits")]
    bits: bool,

    /// Quieter output. -q keeps warnings, -qq only errors, -qqq nothing
    #[clap(short = 'q', long = "quiet", parse(from_occurrences))]
    quiet: u8,

    /// Sets verbosity. -v shows debug detail, -vv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u8,
}

/// Parse the command line, set the log level, and report what we are about to do.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    // Below we report initialization status to the user
    debug!("---- Initialization Start ----",);
    debug!("Verbosity set to {}", opts.verbose);
    info!("Getting input from the file {}", opts.input);
    info!("Writing compressed data to {}", opts.compressed);
    info!("Writing restored data to {}", opts.extracted);
    debug!("---- Initialization End ----\n");
    opts
}
