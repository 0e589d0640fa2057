use std::{env, process};

use rlox::rlox;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut rlox = rlox::new();

    match args.len() {
        1 => rlox.run_prompt(),
        2 => rlox.run_file(args[1].clone()),
        _ => {
            eprintln!("Usage: rlox [script]");
            process::exit(64);
        },
    };
}
