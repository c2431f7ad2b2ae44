//! pagesmith CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors go to stderr;
//! the exit status is 2 for rejected payloads or placements, 1 otherwise.

use pagesmith::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}
