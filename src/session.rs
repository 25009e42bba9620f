//! Interactive play against a random computer opponent.
//!
//! A session reads item names from its input, draws the computer's item
//! uniformly at random, adjudicates, and reports the result from the human
//! player's side. Invalid input is reported and the round retried; `quit`
//! or end of input ends the session.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::hand::{Outcome, Ruleset};
use crate::resolve::adjudicate;

/// Holds the ruleset and RNG for one interactive game.
pub struct Session {
    ruleset: Ruleset,
    rng: SmallRng,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(ruleset: Ruleset) -> Self {
        Session {
            ruleset,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a session with a fixed RNG seed.
    pub fn seeded(ruleset: Ruleset, seed: u64) -> Self {
        Session {
            ruleset,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the round prompt, listing every playable item by name.
    pub fn prompt(&self) -> String {
        let names: Vec<&str> = self.ruleset.items().iter().map(|i| i.name()).collect();
        let (last, rest) = names.split_last().unwrap();
        format!("Let's play! Type '{}' or '{}'", rest.join("', '"), last)
    }

    /// Runs rounds until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            writeln!(out, "{}", self.prompt())?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let raw = line.trim().trim_matches('\'');
            if raw.is_empty() {
                continue;
            }
            if raw.eq_ignore_ascii_case("quit") {
                break;
            }

            let human = match self.ruleset.parse_name(raw) {
                Some(item) => item,
                None => {
                    writeln!(out, "\tComputer says \"no\": invalid input\n")?;
                    continue;
                }
            };

            let computer = self.ruleset.random_item(&mut self.rng);
            writeln!(out, "\tYou've chosen {}", human.name())?;
            writeln!(out, "\tComputer has chosen {}", computer.name())?;

            let message = match adjudicate(self.ruleset, human, computer) {
                Outcome::Tie => "It's a tie!",
                Outcome::FirstWins => "You win!",
                Outcome::SecondWins => "You lose!",
            };
            writeln!(out, "\t{}\n", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(ruleset: Ruleset, script: &str) -> String {
        let mut session = Session::seeded(ruleset, 42);
        let mut output = Vec::new();
        session
            .run(Cursor::new(script), &mut output)
            .expect("session I/O");
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn classic_prompt_lists_three_items() {
        let session = Session::seeded(Ruleset::Classic, 0);
        assert_eq!(
            session.prompt(),
            "Let's play! Type 'Rock', 'Paper' or 'Scissors'"
        );
    }

    #[test]
    fn extended_prompt_lists_five_items() {
        let session = Session::seeded(Ruleset::Extended, 0);
        assert_eq!(
            session.prompt(),
            "Let's play! Type 'Rock', 'Paper', 'Scissors', 'Spock' or 'Lizard'"
        );
    }

    #[test]
    fn round_echoes_both_choices_and_a_result() {
        let output = run_session(Ruleset::Classic, "rock\nquit\n");
        assert!(output.contains("You've chosen Rock"));
        assert!(output.contains("Computer has chosen "));
        let results = ["You win!", "You lose!", "It's a tie!"];
        assert_eq!(
            results.iter().filter(|r| output.contains(*r)).count(),
            1,
            "expected exactly one result line: {}",
            output
        );
    }

    #[test]
    fn quoted_and_mixed_case_input_is_accepted() {
        let output = run_session(Ruleset::Extended, "'Spock'\nquit\n");
        assert!(output.contains("You've chosen Spock"));
    }

    #[test]
    fn invalid_input_is_reported_and_the_round_retried() {
        let output = run_session(Ruleset::Classic, "well\npaper\nquit\n");
        assert!(output.contains("Computer says \"no\": invalid input"));
        assert!(output.contains("You've chosen Paper"));
    }

    #[test]
    fn out_of_ruleset_item_is_invalid_input_not_a_panic() {
        let output = run_session(Ruleset::Classic, "spock\nquit\n");
        assert!(output.contains("Computer says \"no\": invalid input"));
        assert!(!output.contains("You've chosen"));
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let output = run_session(Ruleset::Classic, "");
        assert!(output.starts_with("Let's play!"));
    }

    #[test]
    fn blank_lines_reprompt_without_complaint() {
        let output = run_session(Ruleset::Classic, "\n\nquit\n");
        assert!(!output.contains("invalid input"));
        assert_eq!(output.matches("Let's play!").count(), 3);
    }

    #[test]
    fn reported_result_matches_the_echoed_choices() {
        // The computer's draw is random, but the printed result must agree
        // with adjudicating the two echoed items.
        for seed in 0..20 {
            let mut session = Session::seeded(Ruleset::Extended, seed);
            let mut output = Vec::new();
            session
                .run(Cursor::new("lizard\nquit\n"), &mut output)
                .unwrap();
            let output = String::from_utf8(output).unwrap();

            let computer_name = output
                .lines()
                .find_map(|l| l.trim().strip_prefix("Computer has chosen "))
                .unwrap();
            let computer = crate::hand::Item::from_name(computer_name).unwrap();
            let expected = match adjudicate(Ruleset::Extended, crate::hand::Item::Lizard, computer)
            {
                Outcome::Tie => "It's a tie!",
                Outcome::FirstWins => "You win!",
                Outcome::SecondWins => "You lose!",
            };
            assert!(output.contains(expected), "seed {}: {}", seed, output);
        }
    }
}
