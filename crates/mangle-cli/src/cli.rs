//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mangle: deterministic fuzz payload generation
#[derive(Parser)]
#[command(name = "mangle")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Load fuzzer definitions from a file instead of the bundled catalog
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose output (load report, skipped records)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the fuzzer prototypes in the catalog
    List {
        /// Only prototypes in this category
        #[arg(short, long)]
        category: Option<String>,

        /// List the distinct categories instead of the prototypes
        #[arg(long)]
        categories: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one prototype: kind, categories, payload fragments
    Show {
        /// Prototype id, e.g. 001-HTT-MTH
        #[arg(value_name = "ID")]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate payloads for a prototype and print them to stdout
    Generate {
        /// Prototype id, e.g. 031-HEX-LOW
        #[arg(value_name = "ID")]
        id: String,

        /// Output length in payload fragments
        #[arg(short, long, default_value = "1")]
        length: usize,

        /// Use the arbitrary-precision fuzzer for combination spaces
        /// beyond the 64-bit counter
        #[arg(long)]
        big: bool,

        /// Stop after this many payloads
        #[arg(short, long)]
        max: Option<u64>,
    },
}
