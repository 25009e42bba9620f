//! The adjudicator: decides the winner of a single match.
//!
//! Both rules are pure arithmetic over the canonical item ordering. The
//! classic rule works because each item beats its cyclic predecessor; the
//! extended rule works because stepping an odd distance around the canonical
//! five-item arrangement favors the higher index while an even distance
//! favors the lower. Both are verified against the full pairwise dominance
//! tables in `tests/dominance_tables.rs`, not just spot checks.

use crate::hand::{Item, Outcome, Ruleset};

/// Adjudicates a single match between two items under the given ruleset.
///
/// Pure and stateless. Items outside the ruleset are an internal invariant
/// violation and panic: callers must parse input against the ruleset first.
pub fn adjudicate(ruleset: Ruleset, first: Item, second: Item) -> Outcome {
    assert!(
        ruleset.contains(first),
        "{} is not playable under the {} ruleset",
        first.name(),
        ruleset.name()
    );
    assert!(
        ruleset.contains(second),
        "{} is not playable under the {} ruleset",
        second.name(),
        ruleset.name()
    );

    match ruleset {
        Ruleset::Classic => adjudicate_classic(first, second),
        Ruleset::Extended => adjudicate_extended(first, second),
    }
}

/// Classic rule: each item beats the item one step behind it in the cycle.
fn adjudicate_classic(first: Item, second: Item) -> Outcome {
    let d = (first.index() as i32 - second.index() as i32).rem_euclid(3);
    match d {
        0 => Outcome::Tie,
        1 => Outcome::FirstWins,
        _ => Outcome::SecondWins,
    }
}

/// Extended rule: an even index distance favors the lower-indexed item, an
/// odd distance the higher-indexed one.
fn adjudicate_extended(first: Item, second: Item) -> Outcome {
    let (a, b) = (first.index(), second.index());
    if a == b {
        return Outcome::Tie;
    }
    let lower_wins = a.abs_diff(b) % 2 == 0;
    if (a < b) == lower_wins {
        Outcome::FirstWins
    } else {
        Outcome::SecondWins
    }
}
