//! # Phonebook CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/phonebook/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//! All contact logic is in the `phonebook` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
