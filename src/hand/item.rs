//! Playable items and their canonical ordering.
//!
//! The five items are enumerated in the canonical arrangement that the
//! adjudication arithmetic depends on: Rock=0, Paper=1, Scissors=2, Spock=3,
//! Lizard=4. Display names and batch abbreviations are stored in a
//! compile-time lookup table indexed by the `Item` enum discriminant, so the
//! ordinal used for arithmetic can never drift apart from how an item is
//! rendered.

use serde::{Deserialize, Serialize};

/// The number of items in the extended game.
pub const ITEM_COUNT: usize = 5;

/// A playable item (hand shape).
///
/// Variants are in canonical order; the first three form the classic game.
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Item {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Spock = 3,
    Lizard = 4,
}

/// All item variants in canonical order.
pub const ALL_ITEMS: [Item; ITEM_COUNT] = [
    Item::Rock,
    Item::Paper,
    Item::Scissors,
    Item::Spock,
    Item::Lizard,
];

/// The classic three-item subset, in canonical order.
pub const CLASSIC_ITEMS: [Item; 3] = [Item::Rock, Item::Paper, Item::Scissors];

/// Static metadata for a single item.
struct ItemInfo {
    name: &'static str,
    abbr: &'static str,
}

/// Lookup table indexed by `Item` discriminant.
const ITEM_INFO: [ItemInfo; ITEM_COUNT] = [
    ItemInfo { name: "Rock", abbr: "R" },
    ItemInfo { name: "Paper", abbr: "P" },
    ItemInfo { name: "Scissors", abbr: "S" },
    ItemInfo { name: "Spock", abbr: "K" },
    ItemInfo { name: "Lizard", abbr: "L" },
];

impl Item {
    /// Returns the canonical ordinal of this item.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the full display name for this item.
    pub const fn name(self) -> &'static str {
        ITEM_INFO[self as usize].name
    }

    /// Returns the single-letter abbreviation used in batch match records.
    pub const fn abbr(self) -> &'static str {
        ITEM_INFO[self as usize].abbr
    }

    /// Parses an item from its full display name, case-insensitively.
    pub fn from_name(s: &str) -> Option<Item> {
        ALL_ITEMS
            .iter()
            .copied()
            .find(|item| item.name().eq_ignore_ascii_case(s))
    }

    /// Parses an item from its single-letter abbreviation, case-insensitively.
    pub fn from_abbr(s: &str) -> Option<Item> {
        ALL_ITEMS
            .iter()
            .copied()
            .find(|item| item.abbr().eq_ignore_ascii_case(s))
    }
}
