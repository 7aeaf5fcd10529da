//! I/O module
//!
//! Everything that touches files or streams lives here; the core never does.
//!
//! # Components
//!
//! - `csv_format` - CSV record conversion and balance output
//! - `reader` - Streaming reader over the operations CSV
//! - `journal` - Append-only journal files per account type
//! - `seed` - TOML seed data for the customer directory

pub mod csv_format;
pub mod journal;
pub mod reader;
pub mod seed;

pub use csv_format::{convert_csv_record, write_balances_csv, CsvRecord};
pub use journal::Journal;
pub use reader::OperationReader;
pub use seed::{demo_directory, load_seed, parse_seed, SeedFile};
