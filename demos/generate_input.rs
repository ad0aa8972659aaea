//! Write a binary input file of uniformly sampled values for the sort
//! driver, e.g. `cargo run --example generate_input -- values.bin 4096`.

use std::env;
use std::process::ExitCode;

use treesort::{helpers, io};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("expected <output file name> <element count>");
        return ExitCode::FAILURE;
    }

    let count: usize = match args[2].parse() {
        Ok(count) => count,
        Err(_) => {
            eprintln!("element count must be a non-negative integer");
            return ExitCode::FAILURE;
        }
    };

    let values = helpers::values_fixture(count, Some(-1000.0), Some(1000.0));
    if let Err(err) = io::write_all(&args[1], &values) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
