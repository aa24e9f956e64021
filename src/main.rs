//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::fs;

use log::{debug, error, info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffman::huffman_coding::huffman::{build_code_table, decode, encode};
use huffman::tools::cli::huff_opts_init;
use huffman::tools::freq_count::freqs;

/// Used when no input file is given on the command line.
const DEMO_MESSAGE: &str = "The vast majority of C++ users think that the \
    using-directive is injecting names into the scope where it's declared. In \
    the example above, that would be the scope of the function. In reality, \
    the names are injected into the nearest common ancestor of the target \
    namespace. ";

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = huff_opts_init();

    let data = match &options.file {
        Some(path) => {
            info!("Coding the file {}.", path);
            fs::read(path)?
        }
        None => {
            info!("No input file given, coding the demo message.");
            DEMO_MESSAGE.as_bytes().to_vec()
        }
    };

    let counts = freqs(&data);
    let table = build_code_table(&data)?;
    if table.require_non_empty().is_err() {
        warn!("The input is empty. Nothing to code.");
        return Ok(());
    }

    debug!(
        "Found {} distinct symbols, code lengths {}-{}.",
        table.len(),
        table.min_len(),
        table.max_len()
    );
    if options.show_codes {
        for (sym, code) in table.entries() {
            println!(
                "{}: {}  (count {})",
                display_symbol(sym),
                code.bit_string(),
                counts[sym as usize]
            );
        }
    }

    let packed = encode(&data, &table)?;
    info!(
        "Coded size is {} bits: {} bytes with {} pad bits.",
        packed.bit_count,
        packed.data.len(),
        packed.padding()
    );
    if options.show_bits {
        for chunk in packed.data.chunks(16) {
            println!(
                "{}",
                chunk
                    .iter()
                    .map(|b| format!("{:08b}", b))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }

    let restored = decode(&packed, &table, Some(data.len()))?;
    if restored != data {
        error!("Round trip failed: decoded output differs from the input.");
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "round trip mismatch",
        ));
    }

    info!(
        "Round trip verified. Original message: {} bytes. Coded message: {} bytes.",
        data.len(),
        packed.data.len()
    );
    Ok(())
}

/// Printable symbols display as themselves, everything else as hex.
fn display_symbol(sym: u8) -> String {
    if sym.is_ascii_graphic() || sym == b' ' {
        format!("'{}'", sym as char)
    } else {
        format!("{:#04x}", sym)
    }
}
