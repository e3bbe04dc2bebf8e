use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
    process,
};

use clap::Parser;
use srpn::Session;

/// srpn is an interactive reverse Polish notation calculator with 32-bit
/// saturating arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the sequence of values pushed by the `r` command.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut session = args.seed.map_or_else(Session::new, Session::with_seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                eprintln!("Failed to read from standard input: {error}");
                process::exit(1);
            },
        };

        match session.eval_line(&line, &mut stdout) {
            Ok(ControlFlow::Continue(())) => {},
            Ok(ControlFlow::Break(status)) => {
                let _ = stdout.flush();
                process::exit(status);
            },
            Err(error) => {
                eprintln!("Failed to write to standard output: {error}");
                process::exit(1);
            },
        }
    }
}
