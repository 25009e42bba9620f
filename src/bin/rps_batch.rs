//! Batch Rock-Paper-Scissors adjudication CLI.
//!
//! Reads a match file (first non-blank line: match count; then one line per
//! match with two item abbreviations) and writes one result record per match.
//!
//! Usage:
//!   rps_batch [OPTIONS]
//!
//! Options:
//!   --input FILE    Match file to adjudicate (default: testInput.txt)
//!   --output FILE   Result file path (default: results.out)
//!   --extended      Use the five-item Lizard-Spock ruleset

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use roshambo::batch::run_matches;
use roshambo::hand::Ruleset;

/// Parsed command-line configuration.
#[derive(Debug, PartialEq, Eq)]
struct BatchArgs {
    input_path: String,
    output_path: String,
    ruleset: Ruleset,
    help: bool,
}

impl Default for BatchArgs {
    fn default() -> Self {
        BatchArgs {
            input_path: "testInput.txt".to_string(),
            output_path: "results.out".to_string(),
            ruleset: Ruleset::Classic,
            help: false,
        }
    }
}

/// Parses the arguments following the program name.
fn parse_args(args: &[String]) -> Result<BatchArgs, String> {
    let mut parsed = BatchArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                parsed.input_path = flag_value(args, i, "--input")?;
            }
            "--output" => {
                i += 1;
                parsed.output_path = flag_value(args, i, "--output")?;
            }
            "--extended" => {
                parsed.ruleset = Ruleset::Extended;
            }
            "--help" | "-h" => {
                parsed.help = true;
            }
            other => {
                return Err(format!("Unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(parsed)
}

/// Returns the value at `i`, or an error naming the flag it belongs to.
fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String, String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match parse_args(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    if parsed.help {
        print_usage();
        return;
    }

    let input = match File::open(&parsed.input_path) {
        Ok(f) => BufReader::new(f),
        Err(e) => {
            eprintln!("Failed to open {}: {}", parsed.input_path, e);
            std::process::exit(1);
        }
    };
    let mut output = match File::create(&parsed.output_path) {
        Ok(f) => BufWriter::new(f),
        Err(e) => {
            eprintln!("Failed to create {}: {}", parsed.output_path, e);
            std::process::exit(1);
        }
    };

    match run_matches(parsed.ruleset, input, &mut output) {
        Ok(count) => {
            eprintln!(
                "Adjudicated {} {} matches from {} to {}",
                count,
                parsed.ruleset.name(),
                parsed.input_path,
                parsed.output_path
            );
        }
        Err(e) => {
            eprintln!("{}: {}", parsed.input_path, e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: rps_batch [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input FILE    Match file to adjudicate (default: testInput.txt)");
    eprintln!("  --output FILE   Result file path (default: results.out)");
    eprintln!("  --extended      Use the five-item Lizard-Spock ruleset");
    eprintln!("  --help          Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_uses_the_original_defaults() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed, BatchArgs::default());
        assert_eq!(parsed.input_path, "testInput.txt");
        assert_eq!(parsed.output_path, "results.out");
        assert_eq!(parsed.ruleset, Ruleset::Classic);
    }

    #[test]
    fn paths_and_ruleset_can_be_overridden() {
        let parsed =
            parse_args(&args(&["--input", "in.txt", "--output", "out.txt", "--extended"])).unwrap();
        assert_eq!(parsed.input_path, "in.txt");
        assert_eq!(parsed.output_path, "out.txt");
        assert_eq!(parsed.ruleset, Ruleset::Extended);
    }

    #[test]
    fn trailing_flag_without_a_value_is_an_error_not_a_panic() {
        let err = parse_args(&args(&["--input"])).unwrap_err();
        assert_eq!(err, "Missing value for --input");
        let err = parse_args(&args(&["--input", "in.txt", "--output"])).unwrap_err();
        assert_eq!(err, "Missing value for --output");
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let err = parse_args(&args(&["--classic"])).unwrap_err();
        assert_eq!(err, "Unknown argument: --classic");
    }

    #[test]
    fn help_is_flagged() {
        assert!(parse_args(&args(&["--help"])).unwrap().help);
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }
}
