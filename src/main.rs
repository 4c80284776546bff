//! Ledger Statement CLI
//!
//! Command-line interface for building a monthly statement from a
//! transaction CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --period 202601 --file transactions.csv > statement.json
//! cargo run -- --period 202601 --file transactions.csv --strict-columns
//! RUST_LOG=debug cargo run -- --period 202601 --file transactions.csv
//! ```
//!
//! The statement is printed to stdout as JSON; diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Any file, row, period or format error
//! - 2: Missing or invalid arguments (reported by clap with usage)

use ledger_statement::cli;
use ledger_statement::pipeline::generate_statement;
use ledger_statement::report::TracingReporter;
use std::io::Write;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_tracing();

    let reporter = TracingReporter::new();
    let config = args.to_parser_config();

    let output = match generate_statement(&args.file, &args.period, &config, &reporter) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&output) {
        eprintln!("Error: failed to write output: {}", e);
        process::exit(1);
    }
}

fn write_output(output: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output)?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
