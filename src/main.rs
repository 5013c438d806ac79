//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffpack::compression::compress::compress;
use huffpack::tools::cli::huffopts_init;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    // The logger passes everything; huffopts_init() narrows it to the requested verbosity.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let opts = huffopts_init();

    let result = compress(&opts);
    match &result {
        Ok(_) => info!("Done.\n"),
        Err(e) => error!("Failed: {}", e),
    }
    result.map(|_| ())
}
