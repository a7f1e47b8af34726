//! Process-level plumbing: argument parsing and the line-at-a-time
//! read/dispatch/write loop. None of this feeds back into matching
//! semantics — it only opens an input source and drains it.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use crate::dispatch;
use crate::engine::MatchingEngine;

/// A single-instance, in-memory limit-order matching engine for
/// internal orders across multiple symbols.
#[derive(Parser, Debug)]
#[command(name = "simplecross", version, about)]
pub struct Cli {
    /// Path to the action-line file to read, or `-` for standard input.
    #[arg(long, default_value = "actions.txt")]
    pub input: PathBuf,

    /// Minimum tracing level emitted to stderr. Overridden by RUST_LOG
    /// if that environment variable is set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Run the whole program given already-parsed arguments. Returns the
/// process exit code; errors opening the input are the only failure
/// path.
pub fn run(cli: &Cli) -> Result<i32> {
    let reader: Box<dyn BufRead> = if cli.input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&cli.input)
            .with_context(|| format!("failed to open input file {:?}", cli.input))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = MatchingEngine::new();

    for line in reader.lines() {
        let line = line.context("failed to read a line from the input source")?;
        for result in dispatch::action(&mut engine, &line) {
            writeln!(out, "{result}").context("failed to write a result line to stdout")?;
        }
        out.flush().context("failed to flush stdout")?;
    }

    info!("reached end of input, exiting cleanly");
    Ok(0)
}

pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("simplecross={}", cli.log_level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point called by `main`; logs and maps a fatal error to exit
/// code 1.
pub fn main() -> i32 {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "simplecross exited with an error");
            1
        }
    }
}
