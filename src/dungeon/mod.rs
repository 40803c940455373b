//! Dungeon reward model.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
