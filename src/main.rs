#![forbid(unsafe_code)]

use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(err) = geniewc::run(&args) {
        eprintln!("{}", err);
        process::exit(err.exit_code());
    }
}
