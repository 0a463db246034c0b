//! mnemon-core — Mnemonic data tables and game logic.
//!
//! This crate defines the static tables (major-system lexicon, card deck,
//! books of the Bible) and the pure prompt/check logic that the `mnemon`
//! CLI drives. Everything here is synchronous and side-effect free apart
//! from randomness; all tables are immutable after first use.

pub mod cards;
pub mod error;
pub mod major;
pub mod missing;
pub mod pao;
pub mod summary;
