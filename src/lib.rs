//! Roshambo engine library.
//!
//! Exposes the hand/item data model, the adjudicator, and the interactive
//! and batch front ends used by the console binaries.

pub mod batch;
pub mod hand;
pub mod resolve;
pub mod session;
