//! Monster reward solving: pacing targets in, base rewards out.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
