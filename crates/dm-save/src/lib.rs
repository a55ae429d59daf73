//! File-backed persistence for DungeonMini.
//!
//! [`FileStore`] keeps the last saved game in one JSON file and the score
//! history in another, both human-readable.

pub mod store;

pub use store::{FileStore, read_scores};
