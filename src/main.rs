//! recval CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Runs the CLI (via cli::run)
//! 2. Prints errors to stderr with their code
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use recval::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
