//! Generate command - stream payloads for a prototype to stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use colored::Colorize;

use super::load_catalog;

pub fn run(
    file: Option<PathBuf>,
    id: String,
    length: usize,
    big: bool,
    max: Option<u64>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(file, verbose)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let written = if big {
        let fuzzer = catalog.create_bigint_fuzzer(&id, length)?;
        if verbose {
            eprintln!(
                "{} {} at length {}: {} combinations",
                "Generating".cyan().bold(),
                fuzzer.name(),
                length,
                fuzzer.total()
            );
        }
        write_payloads(&mut out, fuzzer, max)?
    } else {
        let fuzzer = catalog.create_fuzzer(&id, length)?;
        if verbose {
            eprintln!(
                "{} {} at length {}: {} combinations",
                "Generating".cyan().bold(),
                fuzzer.name(),
                length,
                fuzzer.total()
            );
        }
        write_payloads(&mut out, fuzzer, max)?
    };

    out.flush()?;
    if verbose {
        eprintln!("{} {} payloads", "Wrote".cyan().bold(), written);
    }

    Ok(())
}

fn write_payloads(
    out: &mut impl Write,
    fuzzer: impl Iterator<Item = String>,
    max: Option<u64>,
) -> io::Result<u64> {
    let mut written = 0u64;
    for payload in fuzzer {
        if let Some(limit) = max {
            if written >= limit {
                break;
            }
        }
        writeln!(out, "{payload}")?;
        written += 1;
    }
    Ok(written)
}
