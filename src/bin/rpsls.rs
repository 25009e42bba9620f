//! Interactive Rock-Paper-Scissors-Lizard-Spock against a random computer
//! opponent.
//!
//! Reads item names from stdin and writes round results to stdout.
//! Type `quit` (or close stdin) to stop.

use std::io::{self, BufWriter};

use roshambo::hand::Ruleset;
use roshambo::session::Session;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut session = Session::new(Ruleset::Extended);
    if let Err(e) = session.run(stdin.lock(), &mut out) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
