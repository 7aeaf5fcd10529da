//! Account Ledger CLI
//!
//! Applies account operations from a CSV file to a seeded set of customers and
//! prints every account's final balance.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > balances.csv
//! cargo run -- --seed customers.toml operations.csv > balances.csv
//! cargo run -- --seed customers.toml --journal-dir journal --verbose operations.csv
//! ```
//!
//! Balances go to stdout; log lines go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (declined or malformed records are logged, not fatal)
//! - 1: Error (input or seed file missing or unreadable, invalid seed, journal not writable)

use account_ledger::io::{demo_directory, load_seed, Journal};
use account_ledger::{cli, logging, LedgerError, OperationProcessor, ProcessSummary};
use std::process;

fn run(args: &cli::CliArgs) -> Result<ProcessSummary, LedgerError> {
    let directory = match &args.seed {
        Some(path) => load_seed(path)?,
        None => demo_directory()?,
    };

    let mut processor = OperationProcessor::new(directory);
    if let Some(dir) = &args.journal_dir {
        processor = processor.with_journal(Journal::open(dir)?);
    }

    let mut output = std::io::stdout();
    processor.run(&args.input_file, &mut output)
}

fn main() {
    let args = cli::parse_args();
    logging::init_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
