//! Command-line front end for the chemical formula parser
//!
//! Usage:
//!   chemform 'Al2(SO4)3·18H2O' CuSO4.5H2O
//!   echo 'H2O' | chemform --json

use anyhow::{Context, Result};
use clap::Parser;
use ferrum_chemform::{atomic_number, parse_formula_with, ElementCounts, ParseOptions};
use serde_json::json;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "chemform")]
#[command(about = "Count the atoms of each element in chemical formulas")]
struct Args {
    /// Formulas to parse (reads one per line from stdin when omitted)
    formulas: Vec<String>,

    /// Emit one JSON object per formula
    #[arg(long)]
    json: bool,

    /// Maximum parenthesis/hydrate nesting depth
    #[arg(long, default_value_t = ferrum_chemform::config::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Show atomic numbers next to element symbols
    #[arg(long)]
    atomic_numbers: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    init_logging(args.verbose);

    let formulas = if args.formulas.is_empty() {
        read_stdin_formulas().context("Failed to read formulas from stdin")?
    } else {
        std::mem::take(&mut args.formulas)
    };

    let options = ParseOptions::default().with_max_depth(args.max_depth);
    debug!(count = formulas.len(), max_depth = options.max_depth, "parsing formulas");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for formula in &formulas {
        let result = parse_formula_with(formula, &options);
        if result.is_err() {
            failures += 1;
        }

        if args.json {
            let value = match &result {
                Ok(counts) => json!({ "formula": formula, "counts": counts }),
                Err(e) => json!({ "formula": formula, "error": e.to_string(), "kind": e.kind() }),
            };
            writeln!(out, "{}", value).context("Failed to write output")?;
        } else {
            let written = match &result {
                Ok(counts) => writeln!(
                    out,
                    "{}: {}",
                    formula,
                    render_counts(counts, args.atomic_numbers)
                ),
                Err(e) => writeln!(out, "{}: error: {}", formula, e),
            };
            written.context("Failed to write output")?;
        }
    }

    info!(total = formulas.len(), failures, "done");

    out.flush().context("Failed to flush output")?;
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}

fn read_stdin_formulas() -> io::Result<Vec<String>> {
    let mut formulas = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            formulas.push(line);
        }
    }
    Ok(formulas)
}

fn render_counts(counts: &ElementCounts, with_atomic_numbers: bool) -> String {
    if !with_atomic_numbers {
        return counts.to_string();
    }
    counts
        .iter()
        .map(|(symbol, count)| match atomic_number(symbol) {
            Some(z) => format!("{} (Z={}): {}", symbol, z, count),
            None => format!("{}: {}", symbol, count),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
