use std::{env, fs::read_to_string, process::exit, time::Instant};

use lexide::lexer::lexer::scan;
use lexide::report::report::{error_listing, symbol_table, token_table};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: lexide <source-file>");
        exit(1);
    }

    let source = read_to_string(&args[1]).expect("Failed to read file!");

    let start = Instant::now();
    let result = scan(&source);
    println!("Scanned in {:?}", start.elapsed());

    println!();
    println!("{}", token_table(&result.tokens));
    println!("{}", error_listing(&result.errors));
    println!();
    println!("{}", symbol_table(&result.tokens));
}
