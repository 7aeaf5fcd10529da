use clap::Parser;
use std::path::PathBuf;

/// Apply account operations to a customer ledger
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Apply deposits, withdrawals, transfers and interest to customer accounts", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the operations CSV file")]
    pub input_file: PathBuf,

    /// Seed file describing customers and accounts
    #[arg(
        long = "seed",
        value_name = "TOML",
        help = "Customer seed file (default: built-in demo customers)"
    )]
    pub seed: Option<PathBuf>,

    /// Directory receiving the per-account-type journal files
    #[arg(
        long = "journal-dir",
        value_name = "DIR",
        help = "Append journal lines to savings.txt, cheque.txt and investment.txt in DIR"
    )]
    pub journal_dir: Option<PathBuf>,

    /// Log every applied operation
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging on stderr")]
    pub verbose: bool,
}
