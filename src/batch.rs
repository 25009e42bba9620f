//! Batch adjudication of match records from a structured input file.
//!
//! Format: the first non-blank line holds the number of matches; each
//! following non-blank line holds two whitespace-separated item
//! abbreviations. One `Case #i: <winner>` record is written per match, with
//! `-` marking a tie.
//!
//! Batch mode has no interactive recovery path, so every malformed input is
//! fatal and the error names the offending line.

use std::io::{self, BufRead, Write};

use crate::hand::{Item, Ruleset};
use crate::resolve::adjudicate;

/// Errors that can occur while running a batch of matches.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("missing match count: input has no non-blank lines")]
    MissingCount,

    #[error("line {line}: invalid match count: '{text}'")]
    InvalidCount { line: usize, text: String },

    #[error("line {line}: expected two items, got '{text}'")]
    MalformedRecord { line: usize, text: String },

    #[error("line {line}: unknown item abbreviation '{token}'")]
    UnknownItem { line: usize, token: String },

    #[error("expected {expected} match records, input ended after {found}")]
    TruncatedInput { expected: usize, found: usize },
}

/// Adjudicates every match record in `input`, writing one result record per
/// match to `out`. Returns the number of matches adjudicated.
///
/// Blank lines are skipped; lines beyond the announced count are ignored.
pub fn run_matches<R: BufRead, W: Write>(
    ruleset: Ruleset,
    input: R,
    out: &mut W,
) -> Result<usize, BatchError> {
    let mut lines = input.lines().enumerate();

    let expected = read_count(&mut lines)?;

    let mut found = 0;
    while found < expected {
        let (idx, line) = match lines.next() {
            Some((idx, line)) => (idx, line?),
            None => return Err(BatchError::TruncatedInput { expected, found }),
        };
        if line.trim().is_empty() {
            continue;
        }

        let (first, second) = parse_record(ruleset, idx + 1, &line)?;
        found += 1;

        let result = match adjudicate(ruleset, first, second).winner(first, second) {
            Some(item) => item.abbr(),
            None => "-",
        };
        writeln!(out, "Case #{}: {}", found, result)?;
    }

    Ok(found)
}

/// Reads the match count from the first non-blank line.
fn read_count<I>(lines: &mut I) -> Result<usize, BatchError>
where
    I: Iterator<Item = (usize, io::Result<String>)>,
{
    for (idx, line) in lines {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        return text.parse().map_err(|_| BatchError::InvalidCount {
            line: idx + 1,
            text: text.to_string(),
        });
    }
    Err(BatchError::MissingCount)
}

/// Parses one match record: exactly two item abbreviations.
fn parse_record(ruleset: Ruleset, line: usize, text: &str) -> Result<(Item, Item), BatchError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (first, second) = match tokens.as_slice() {
        [first, second] => (*first, *second),
        _ => {
            return Err(BatchError::MalformedRecord {
                line,
                text: text.trim().to_string(),
            })
        }
    };

    let parse = |token: &str| {
        ruleset.parse_abbr(token).ok_or_else(|| BatchError::UnknownItem {
            line,
            token: token.to_string(),
        })
    };
    Ok((parse(first)?, parse(second)?))
}
