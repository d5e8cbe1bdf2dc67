//! Kata Runner - introductory programming drills as a CLI
//!
//! Runs a fixed sequence of drills (calculator, age message, loan) and
//! models a small mutable car record.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
