//! The hand-game data model.
//!
//! Items, rulesets, and match outcomes. The adjudication rule itself lives
//! in [`crate::resolve`].

pub mod item;
pub mod outcome;
pub mod ruleset;

pub use item::{Item, ALL_ITEMS, CLASSIC_ITEMS, ITEM_COUNT};
pub use outcome::Outcome;
pub use ruleset::Ruleset;
