#![warn(clippy::pedantic, clippy::nursery, clippy::unwrap_used, clippy::perf)]
#![deny(unused_must_use)]

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    process::ExitCode,
};

use icd9_class::{classify_batch_par, error::CharSetError, kind_of, CharSet};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

#[cfg(not(target_arch = "wasm32"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Error, Debug)]
enum CliError {
    #[error("Invalid target characters: {0}")]
    CharSet(#[from] CharSetError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = cli::parse_args();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> Result<(), CliError> {
    let out = BufWriter::new(io::stdout().lock());
    match &args.path {
        Some(path) => {
            tracing::debug!(?path, "reading codes");
            classify_lines(args, BufReader::new(File::open(path)?), out)
        }
        None => classify_lines(args, io::stdin().lock(), out),
    }
}

fn classify_lines(
    args: &cli::Args,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<(), CliError> {
    let targets = CharSet::try_new(&args.chars)?;
    let codes = read_codes(input)?;

    if args.kind {
        for code in &codes {
            writeln!(out, "{code}\t{}", kind_of(code))?;
        }
    } else {
        let res = classify_batch_par(&codes, targets.as_str(), args.invert, args.jobs);
        for (code, matched) in codes.iter().zip(res) {
            writeln!(out, "{code}\t{matched}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Invalid UTF-8 is replaced rather than rejected, so a bad line classifies
/// as a non-match instead of failing the run.
fn read_codes(input: impl BufRead) -> io::Result<Vec<String>> {
    let codes = input
        .split(b'\n')
        .map(|line| -> io::Result<String> {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            Ok(String::from_utf8_lossy(&line).into_owned())
        })
        .collect::<io::Result<Vec<_>>>()?;
    tracing::debug!(count = codes.len(), "read codes");
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{classify_lines, cli::Args, CharSetError, CliError};

    fn test_run(args: &[&str], input: &[u8], expected_output: &str) {
        let args = Args::parse_from(std::iter::once("icd9-class").chain(args.iter().copied()));
        let mut out = Vec::new();
        classify_lines(&args, input, &mut out).expect("Run should succeed");
        assert_eq!(String::from_utf8(out).expect("Output is UTF-8"), expected_output);
    }

    #[test]
    fn prints_code_and_match_in_order() {
        test_run(&[], b"V10\n E950\n427\n", "V10\ttrue\n E950\ttrue\n427\tfalse\n");
        test_run(&["-c", "V"], b"V10\n E950\n427", "V10\ttrue\n E950\tfalse\n427\tfalse\n");
    }

    #[test]
    fn inverted() {
        test_run(&["-i"], b"V10\n427\n", "V10\tfalse\n427\ttrue\n");
    }

    #[test]
    fn blank_lines_are_codes() {
        test_run(&[], b"V1\n\n  \nE2\n", "V1\ttrue\n\tfalse\n  \tfalse\nE2\ttrue\n");
    }

    #[test]
    fn crlf_input() {
        test_run(&[], b"V1\r\n427\r\n", "V1\ttrue\n427\tfalse\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_match() {
        test_run(
            &[],
            b"V10\n E950\n\xe9427\n427\n",
            "V10\ttrue\n E950\ttrue\n\u{FFFD}427\tfalse\n427\tfalse\n",
        );
    }

    #[test]
    fn kinds() {
        test_run(
            &["-k"],
            b"V10\n e950\n427\n \n",
            "V10\tvariant\n e950\tsupplemental\n427\tother\n \tblank\n",
        );
    }

    #[test]
    fn empty_input() {
        test_run(&[], b"", "");
    }

    #[test]
    fn parallel_output_keeps_order() {
        let input: String = (0..10_000).map(|i| format!("{}{i}\n", ["V", "4"][i % 2])).collect();
        let expected: String =
            (0..10_000).map(|i| format!("{}{i}\t{}\n", ["V", "4"][i % 2], i % 2 == 0)).collect();
        test_run(&["-j", "4", "-c", "V"], input.as_bytes(), &expected);
    }

    #[test]
    fn empty_chars_rejected() {
        let args = Args::parse_from(["icd9-class", "-c", ""]);
        let mut out = Vec::new();
        let res = classify_lines(&args, &b"V10\n"[..], &mut out);
        assert!(matches!(res, Err(CliError::CharSet(CharSetError::Empty))), "{res:?}");
        assert!(out.is_empty());
    }
}
