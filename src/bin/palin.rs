use std::io;
use std::process;

use env_logger::Env;
use log::debug;

use palin::{min_edits_to_palindrome, read_problem};

fn main() {
    env_logger::Builder::from_env(Env::default()).init();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let s = match read_problem(&mut reader) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("palin: {err}");
            process::exit(1);
        }
    };

    let answer = min_edits_to_palindrome(&s);
    debug!("n = {}, answer = {answer}", s.len());
    println!("{answer}");
}
