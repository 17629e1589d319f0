//! Compare two text files and print the result as JSON
//!
//! Usage: cargo run --example compare_files -- <original.txt> <modified.txt>

use std::env;
use std::fs;
use std::process::ExitCode;

use comparely_core::{ComparisonService, MemoryStore};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [original, modified] = args.as_slice() else {
        eprintln!("Usage: compare_files <original.txt> <modified.txt>");
        return ExitCode::FAILURE;
    };

    let read = |path: &String| {
        fs::read_to_string(path).map_err(|e| eprintln!("Failed to read {}: {}", path, e))
    };
    let (Ok(original), Ok(modified)) = (read(original), read(modified)) else {
        return ExitCode::FAILURE;
    };

    let service = ComparisonService::new(MemoryStore::new());
    match service.compare_texts(&original, &modified) {
        Ok(record) => match record.to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Rejected ({}): {}", e.reason(), e);
            ExitCode::FAILURE
        }
    }
}
