use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

/// Classify ICD-9 codes by their first significant character
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File with one code per line, stdin if omitted
    #[arg()]
    pub(super) path: Option<PathBuf>,

    /// Characters that count as a match
    #[arg(short, long, default_value = "VvEe")]
    pub(super) chars: String,

    /// Report codes that don't match instead
    #[arg(short, long, default_value_t = false)]
    pub(super) invert: bool,

    /// Worker threads
    #[arg(short, long, default_value = "1")]
    pub(super) jobs: NonZeroUsize,

    /// Print the kind of each code instead of a match
    #[arg(short, long, default_value_t = false, conflicts_with_all = ["chars", "invert"])]
    pub(super) kind: bool,

    /// Debug logging, unless RUST_LOG says otherwise
    #[arg(short, long, default_value_t = false)]
    pub(super) verbose: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
