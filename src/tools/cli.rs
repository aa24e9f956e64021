//! Command line interface for the demo binary - uses the external CLAP crate.

use clap::Parser;

/// Command line options for the round-trip demo.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "A Huffman entropy coder.",
    long_about = "
    Builds a minimum-redundancy prefix code from the byte frequencies of the
    input, packs the input into a dense bitstream, then unpacks it and checks
    the round trip. With no file argument, a built-in demo message is coded."
)]
pub struct HuffOpts {
    /// File to code; the built-in demo message is used when omitted
    #[clap()]
    pub file: Option<String>,

    /// Print the code assigned to each symbol
    #[clap(long = "show-codes")]
    pub show_codes: bool,

    /// Print the packed bytes of the coded message
    #[clap(long = "show-bits")]
    pub show_bits: bool,

    /// Sets verbosity. -v shows debug detail, -vv trace detail
    #[clap(short = 'v', parse(from_occurrences))]
    pub verbose: u64,
}

/// Parse the command line and set the log level from the verbosity flags.
pub fn huff_opts_init() -> HuffOpts {
    let opts = HuffOpts::parse();
    match opts.verbose {
        0 => log::set_max_level(log::LevelFilter::Info),
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
    opts
}
