//! Benchmark suite for the account operations
//!
//! Uses the divan benchmarking framework.
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Operation streams are generated in memory against the built-in demo
//! customers: a rotating mix of deposits, withdrawals (some declined),
//! transfers and interest.

use account_ledger::io::{demo_directory, OperationReader};
use account_ledger::{LedgerEngine, OperationProcessor, OperationRecord, OperationType};
use rust_decimal::Decimal;

fn main() {
    divan::main();
}

const ACCOUNTS: [(&str, &str, &str); 3] = [
    ("JSMITH", "S1001", "C1001"),
    ("JDOE", "C2002", "S2002"),
    ("HKING", "I1010", "C1010"),
];

fn operations_csv(count: usize) -> String {
    let mut csv = String::from("type,customer,account,amount,destination\n");
    for i in 0..count {
        let (customer, account, other) = ACCOUNTS[i % ACCOUNTS.len()];
        let line = match i % 4 {
            0 => format!("deposit,{},{},{}.25,\n", customer, account, i % 500 + 1),
            1 => format!("withdrawal,{},{},{}.50,\n", customer, account, i % 700 + 1),
            2 => format!("transfer,{},{},{},{}\n", customer, account, i % 90 + 1, other),
            _ => format!("interest,{},{},,\n", customer, account),
        };
        csv.push_str(&line);
    }
    csv
}

fn records(count: usize) -> Vec<OperationRecord> {
    (0..count)
        .map(|i| {
            let (customer, account, other) = ACCOUNTS[i % ACCOUNTS.len()];
            let op_type = match i % 4 {
                0 => OperationType::Deposit,
                1 => OperationType::Withdrawal,
                2 => OperationType::Transfer,
                _ => OperationType::Interest,
            };
            OperationRecord {
                op_type,
                customer: customer.to_string(),
                account: account.to_string(),
                amount: (op_type != OperationType::Interest).then(|| Decimal::new((i % 500 + 1) as i64, 0)),
                destination: (op_type == OperationType::Transfer).then(|| other.to_string()),
            }
        })
        .collect()
}

/// Engine only: records already parsed
#[divan::bench(args = [100, 1_000, 10_000])]
fn engine_process(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| {
            (
                LedgerEngine::new(demo_directory().expect("demo seed")),
                records(count),
            )
        })
        .bench_local_values(|(mut engine, records)| {
            for record in records {
                let _ = engine.process(record);
            }
            engine
        });
}

/// Full pipeline: CSV parsing, engine and balances output
#[divan::bench(args = [100, 1_000, 10_000])]
fn processor_pipeline(bencher: divan::Bencher, count: usize) {
    let csv = operations_csv(count);

    bencher
        .with_inputs(|| OperationProcessor::new(demo_directory().expect("demo seed")))
        .bench_local_values(|mut processor| {
            let reader = OperationReader::from_reader(csv.as_bytes()).expect("header");
            processor.process_records(reader).expect("processing failed");

            let mut output = Vec::new();
            processor.write_balances(&mut output).expect("write failed");
            output
        });
}
